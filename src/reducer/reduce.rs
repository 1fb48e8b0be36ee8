//! Reduces a 3-hourly forecast into one representative sample per calendar day.

use crate::reducer::error::ReduceError;
use crate::types::daily_forecast::DailyForecast;
use crate::types::day_key::DayKey;
use crate::types::sample::{ForecastEntry, Sample};
use bon::bon;
use chrono::TimeZone;
use log::{debug, warn};
use std::collections::HashSet;

/// Number of days shown when no limit is configured.
pub const DEFAULT_DAY_LIMIT: usize = 5;

/// What to do with a forecast entry that lacks a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Log the entry and continue with the rest of the forecast.
    #[default]
    Skip,
    /// Fail the whole reduction with [`ReduceError::MalformedSample`].
    Abort,
}

/// Turns raw forecast entries into at most `day_limit` [`DailyForecast`]s.
///
/// Days are identified with [`DayKey`] in the reducer's timezone. For every day the *first*
/// entry encountered is kept and later entries for the same day are dropped, so the output
/// follows the order in which days first appear. Input is expected to be sorted by time
/// already; the reducer does not re-sort it.
///
/// A reducer holds no mutable state and may be shared freely between concurrent fetches.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use dayforecast::{ForecastReducer, MalformedPolicy, ReduceError};
///
/// # fn main() -> Result<(), ReduceError> {
/// let reducer = ForecastReducer::builder()
///     .timezone(Utc)
///     .day_limit(3)
///     .malformed(MalformedPolicy::Abort)
///     .build()?;
///
/// let days = reducer.reduce(&[])?;
/// assert!(days.is_empty());
///
/// // A zero day limit is rejected up front.
/// assert!(ForecastReducer::builder().timezone(Utc).day_limit(0).build().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForecastReducer<Tz: TimeZone> {
    timezone: Tz,
    day_limit: usize,
    malformed: MalformedPolicy,
}

#[bon]
impl<Tz: TimeZone> ForecastReducer<Tz> {
    /// Creates a reducer.
    ///
    /// # Arguments
    ///
    /// * `.timezone(Tz)`: **Required.** The viewer's timezone, used to decide which
    ///   calendar day a sample belongs to.
    /// * `.day_limit(usize)`: Optional. Maximum number of days returned. Defaults to
    ///   [`DEFAULT_DAY_LIMIT`].
    /// * `.malformed(MalformedPolicy)`: Optional. Defaults to [`MalformedPolicy::Skip`].
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidArgument`] if `day_limit` is zero.
    #[builder]
    pub fn new(
        timezone: Tz,
        day_limit: Option<usize>,
        malformed: Option<MalformedPolicy>,
    ) -> Result<Self, ReduceError> {
        let day_limit = day_limit.unwrap_or(DEFAULT_DAY_LIMIT);
        validate_day_limit(day_limit)?;
        Ok(Self {
            timezone,
            day_limit,
            malformed: malformed.unwrap_or_default(),
        })
    }

    pub fn day_limit(&self) -> usize {
        self.day_limit
    }

    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Reduces `entries` to one [`DailyForecast`] per calendar day.
    ///
    /// The result holds `min(distinct days, day_limit)` entries, never two for the same
    /// [`DayKey`]. The walk stops once the limit is reached, so entries past the last
    /// retained day are not inspected.
    ///
    /// # Errors
    ///
    /// With [`MalformedPolicy::Abort`], returns the first [`ReduceError::MalformedSample`]
    /// met before the limit is reached.
    pub fn reduce(&self, entries: &[ForecastEntry]) -> Result<Vec<DailyForecast>, ReduceError> {
        let mut seen: HashSet<DayKey> = HashSet::with_capacity(self.day_limit);
        let mut days: Vec<DailyForecast> = Vec::with_capacity(self.day_limit);

        for (index, entry) in entries.iter().enumerate() {
            if days.len() == self.day_limit {
                break;
            }

            let sample = match Sample::from_entry(entry, index) {
                Ok(sample) => sample,
                Err(e) if self.malformed == MalformedPolicy::Skip => {
                    warn!("Skipping forecast entry: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let day = DayKey::new(&sample.timestamp, &self.timezone);
            if seen.insert(day) {
                debug!("Entry {} at {} represents {}", index, sample.timestamp, day);
                days.push(DailyForecast::new(day, sample));
            }
        }

        Ok(days)
    }
}

/// Reduces `entries` to at most `day_limit` days as seen from `tz`, skipping malformed
/// entries.
///
/// Shorthand for building a [`ForecastReducer`] with the default [`MalformedPolicy`].
///
/// # Errors
///
/// Returns [`ReduceError::InvalidArgument`] if `day_limit` is zero.
pub fn reduce<Tz: TimeZone>(
    entries: &[ForecastEntry],
    day_limit: usize,
    tz: &Tz,
) -> Result<Vec<DailyForecast>, ReduceError> {
    ForecastReducer::builder()
        .timezone(tz.clone())
        .day_limit(day_limit)
        .build()?
        .reduce(entries)
}

pub(crate) fn validate_day_limit(day_limit: usize) -> Result<(), ReduceError> {
    if day_limit == 0 {
        return Err(ReduceError::InvalidArgument(
            "day limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}
