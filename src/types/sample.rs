//! Defines the raw forecast record as delivered by OpenWeather (`ForecastEntry`) and its
//! validated, immutable counterpart (`Sample`).

use crate::reducer::error::ReduceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of the `list` array of an OpenWeather `/forecast` response.
///
/// Every field is optional so that a single incomplete record deserializes cleanly and
/// can be rejected on its own, instead of failing the decoding of the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time, epoch seconds (UTC).
    pub dt: Option<i64>,
    pub main: Option<MainReadings>,
    pub wind: Option<WindReadings>,
    #[serde(default)]
    pub weather: Vec<ConditionReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in °C (the request asks for metric units).
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindReadings {
    /// Wind speed in m/s.
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionReading {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// A single validated forecast data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    /// °C
    pub temperature: f64,
    /// m/s
    pub wind_speed: f64,
    /// Coarse category as reported by the source, e.g. "Rain", "Clouds", "Clear".
    pub condition_main: String,
    pub condition_description: String,
    /// Opaque icon identifier, e.g. "10d".
    pub icon_code: String,
}

impl Sample {
    /// Validates a raw entry.
    ///
    /// # Arguments
    ///
    /// * `entry` - The raw record.
    /// * `index` - Position of the record in its input list, reported back on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::MalformedSample`] naming the first missing field. A timestamp
    /// chrono cannot represent is reported as a missing `dt`.
    pub fn from_entry(entry: &ForecastEntry, index: usize) -> Result<Self, ReduceError> {
        let missing = |field: &'static str| ReduceError::MalformedSample { index, field };

        let timestamp = entry
            .dt
            .and_then(|dt| DateTime::<Utc>::from_timestamp(dt, 0))
            .ok_or_else(|| missing("dt"))?;
        let temperature = entry
            .main
            .as_ref()
            .and_then(|m| m.temp)
            .ok_or_else(|| missing("main.temp"))?;
        let wind_speed = entry
            .wind
            .as_ref()
            .and_then(|w| w.speed)
            .ok_or_else(|| missing("wind.speed"))?;
        let condition = entry.weather.first().ok_or_else(|| missing("weather"))?;
        let condition_main = condition
            .main
            .clone()
            .ok_or_else(|| missing("weather.main"))?;
        let condition_description = condition
            .description
            .clone()
            .ok_or_else(|| missing("weather.description"))?;
        let icon_code = condition
            .icon
            .clone()
            .ok_or_else(|| missing("weather.icon"))?;

        Ok(Sample {
            timestamp,
            temperature,
            wind_speed,
            condition_main,
            condition_description,
            icon_code,
        })
    }
}

impl From<&Sample> for ForecastEntry {
    fn from(sample: &Sample) -> Self {
        ForecastEntry {
            dt: Some(sample.timestamp.timestamp()),
            main: Some(MainReadings {
                temp: Some(sample.temperature),
            }),
            wind: Some(WindReadings {
                speed: Some(sample.wind_speed),
            }),
            weather: vec![ConditionReading {
                main: Some(sample.condition_main.clone()),
                description: Some(sample.condition_description.clone()),
                icon: Some(sample.icon_code.clone()),
            }],
        }
    }
}
