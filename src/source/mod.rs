pub mod error;
pub mod forecast_source;
pub mod models;
pub mod open_weather;
