mod config;
mod error;
mod forecaster;
mod reducer;
mod render;
mod source;
mod types;

pub use config::{ConfigError, ForecastConfig, API_KEY_VAR, DAY_LIMIT_VAR};
pub use error::ForecastError;
pub use forecaster::Forecaster;

pub use reducer::error::ReduceError;
pub use reducer::reduce::{reduce, ForecastReducer, MalformedPolicy, DEFAULT_DAY_LIMIT};

pub use source::error::SourceError;
pub use source::forecast_source::ForecastSource;
pub use source::models::{City, ForecastResponse};
pub use source::open_weather::{OpenWeatherSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub use render::card::{icon_url, ForecastCard, Theme, ICON_BASE_URL};
pub use render::view::{ForecastView, Renderer, TextRenderer};

pub use types::daily_forecast::DailyForecast;
pub use types::day_key::DayKey;
pub use types::lat_lon::LatLon;
pub use types::presentation_category::PresentationCategory;
pub use types::sample::{ConditionReading, ForecastEntry, MainReadings, Sample, WindReadings};
