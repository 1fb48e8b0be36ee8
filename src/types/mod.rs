pub mod daily_forecast;
pub mod day_key;
pub mod lat_lon;
pub mod presentation_category;
pub mod sample;
