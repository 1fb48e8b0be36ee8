use crate::types::sample::ForecastEntry;
use serde::Deserialize;

/// Envelope of the OpenWeather 5 day / 3 hour `/forecast` response. Only the parts this
/// crate reads are modeled; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Number of entries in `list`, as reported by the API.
    pub cnt: Option<usize>,
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    pub city: Option<City>,
}

#[derive(Debug, Deserialize)]
pub struct City {
    pub name: Option<String>,
    pub country: Option<String>,
}
