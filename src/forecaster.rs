//! This module provides the main entry point: a `Forecaster` that fetches raw entries from
//! a [`ForecastSource`] and reduces them to one card-ready forecast per day.

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::reducer::reduce::{ForecastReducer, MalformedPolicy};
use crate::render::view::ForecastView;
use crate::source::forecast_source::ForecastSource;
use crate::source::open_weather::OpenWeatherSource;
use crate::types::daily_forecast::DailyForecast;
use bon::bon;
use chrono::TimeZone;
use log::info;

/// Fetches a forecast and reduces it to daily summaries.
///
/// Every call to [`Forecaster::daily`] performs exactly one fetch and computes a fresh
/// result. Nothing is cached between calls and overlapping calls are not deduplicated.
///
/// # Examples
///
/// ```rust,no_run
/// # use dayforecast::{ForecastConfig, ForecastError, Forecaster};
/// use chrono::Local;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let config = ForecastConfig::from_env()?;
/// let forecaster = Forecaster::from_config(&config, Local)?;
///
/// for day in forecaster.daily().await? {
///     println!("{}: {} ({})", day.day, day.sample.condition_description, day.category);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Forecaster<S, Tz: TimeZone> {
    source: S,
    reducer: ForecastReducer<Tz>,
}

#[bon]
impl<S: ForecastSource, Tz: TimeZone> Forecaster<S, Tz> {
    /// Creates a forecaster from any [`ForecastSource`].
    ///
    /// # Arguments
    ///
    /// * `.source(S)`: **Required.** Where raw entries come from.
    /// * `.timezone(Tz)`: **Required.** The viewer's timezone; decides day boundaries.
    /// * `.day_limit(usize)`: Optional. Defaults to 5.
    /// * `.malformed(MalformedPolicy)`: Optional. Defaults to [`MalformedPolicy::Skip`].
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Reduce`] if `day_limit` is zero.
    #[builder]
    pub fn new(
        source: S,
        timezone: Tz,
        day_limit: Option<usize>,
        malformed: Option<MalformedPolicy>,
    ) -> Result<Self, ForecastError> {
        let reducer = ForecastReducer::builder()
            .timezone(timezone)
            .maybe_day_limit(day_limit)
            .maybe_malformed(malformed)
            .build()?;
        Ok(Self { source, reducer })
    }

    pub fn reducer(&self) -> &ForecastReducer<Tz> {
        &self.reducer
    }

    /// Fetches the forecast and returns at most `day_limit` days in chronological order.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::Source`] if the fetch fails.
    /// * [`ForecastError::Reduce`] if an entry is malformed and the policy is
    ///   [`MalformedPolicy::Abort`].
    pub async fn daily(&self) -> Result<Vec<DailyForecast>, ForecastError> {
        let entries = self.source.fetch().await?;
        let days = self.reducer.reduce(&entries)?;
        info!("Reduced {} forecast entries to {} days", entries.len(), days.len());
        Ok(days)
    }

    /// Like [`Forecaster::daily`], with any failure folded into a displayable view.
    pub async fn view(&self) -> ForecastView {
        ForecastView::from_result(self.daily().await)
    }
}

impl<Tz: TimeZone> Forecaster<OpenWeatherSource, Tz> {
    /// Wires an [`OpenWeatherSource`] from `config`.
    pub fn from_config(config: &ForecastConfig, timezone: Tz) -> Result<Self, ForecastError> {
        let source = OpenWeatherSource::builder()
            .api_key(config.api_key.clone())
            .location(config.location)
            .base_url(config.base_url.clone())
            .timeout_secs(config.timeout_secs)
            .build()?;

        Self::builder()
            .source(source)
            .timezone(timezone)
            .day_limit(config.day_limit)
            .build()
    }
}
