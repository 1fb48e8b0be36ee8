//! Calendar-day identity of a forecast sample, as seen from the viewer's timezone.

use chrono::{DateTime, Datelike, Month, TimeZone, Utc, Weekday};
use serde::Serialize;
use std::fmt;

/// Identifies the calendar day a timestamp falls on in a given timezone.
///
/// Two samples with the same `DayKey` belong to the same day regardless of their time of
/// day. The key carries no year, so it is only meaningful inside a window shorter than a
/// year, which a five day forecast always is.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use dayforecast::DayKey;
///
/// // 23:30 UTC on Friday 18 October 2024
/// let ts = Utc.with_ymd_and_hms(2024, 10, 18, 23, 30, 0).unwrap();
///
/// assert_eq!(DayKey::new(&ts, &Utc).to_string(), "Fri, Oct 18");
/// // One hour east of UTC it is already Saturday.
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// assert_eq!(DayKey::new(&ts, &cet).to_string(), "Sat, Oct 19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayKey {
    pub weekday: Weekday,
    pub month: u32,
    pub day: u32,
}

impl DayKey {
    /// Computes the key of `timestamp` as observed in `tz`.
    pub fn new<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> Self {
        let local = timestamp.with_timezone(tz);
        DayKey {
            weekday: local.weekday(),
            month: local.month(),
            day: local.day(),
        }
    }
}

/// Formats as a short card label, e.g. `Sat, Oct 19`.
impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = Month::try_from(self.month as u8).map_err(|_| fmt::Error)?;
        write!(f, "{}, {} {}", self.weekday, &month.name()[..3], self.day)
    }
}
