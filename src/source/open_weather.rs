//! HTTP client for the OpenWeather 5 day / 3 hour forecast endpoint.

use crate::source::error::SourceError;
use crate::source::forecast_source::ForecastSource;
use crate::source::models::ForecastResponse;
use crate::types::lat_lon::LatLon;
use crate::types::sample::ForecastEntry;
use async_trait::async_trait;
use bon::bon;
use log::{info, warn};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches metric forecasts for a single location from OpenWeather.
///
/// One call to [`ForecastSource::fetch`] is one HTTP round trip. There is no caching and
/// no retry: a transport failure, a non-success status or an undecodable body is returned
/// as a [`SourceError`] right away.
///
/// # Examples
///
/// ```rust,no_run
/// # use dayforecast::{ForecastSource, LatLon, OpenWeatherSource, SourceError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), SourceError> {
/// let source = OpenWeatherSource::builder()
///     .api_key("my-api-key")
///     .location(LatLon::LONDON)
///     .build()?;
///
/// let entries = source.fetch().await?;
/// println!("Got {} 3-hourly entries", entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenWeatherSource {
    client: Client,
    base_url: String,
    api_key: String,
    location: LatLon,
}

#[bon]
impl OpenWeatherSource {
    /// Creates a source.
    ///
    /// # Arguments
    ///
    /// * `.api_key(impl Into<String>)`: **Required.** OpenWeather API key, sent as `appid`.
    /// * `.location(LatLon)`: Optional. Defaults to [`LatLon::LONDON`].
    /// * `.base_url(impl Into<String>)`: Optional. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout_secs(u64)`: Optional. Whole-request timeout, defaults to
    ///   [`DEFAULT_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        location: Option<LatLon>,
        #[builder(into)] base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(SourceError::ClientBuild)?;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            api_key,
            location: location.unwrap_or_default(),
        })
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    fn endpoint(&self) -> String {
        format!("{}/forecast", self.base_url)
    }

    /// The request URL without the `appid` parameter, for logs and errors.
    fn redacted_url(&self) -> String {
        format!(
            "{}?lat={}&lon={}&units=metric",
            self.endpoint(),
            self.location.lat(),
            self.location.lon()
        )
    }
}

impl fmt::Debug for OpenWeatherSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherSource")
            .field("base_url", &self.base_url)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ForecastSource for OpenWeatherSource {
    async fn fetch(&self) -> Result<Vec<ForecastEntry>, SourceError> {
        let url = self.redacted_url();
        info!("Fetching forecast from {}", url);

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("lat", self.location.lat().to_string()),
                ("lon", self.location.lon().to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    SourceError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    SourceError::NetworkRequest(url, e)
                });
            }
        };

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(url.clone(), e.without_url()))?;

        let place = body
            .city
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("unknown place");
        info!(
            "Received {} forecast entries for {} (reported count: {:?})",
            body.list.len(),
            place,
            body.cnt
        );

        Ok(body.list)
    }
}
