use crate::types::day_key::DayKey;
use crate::types::presentation_category::PresentationCategory;
use crate::types::sample::Sample;
use serde::Serialize;

/// The sample chosen to represent one calendar day, together with its derived theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub day: DayKey,
    pub sample: Sample,
    pub category: PresentationCategory,
}

impl DailyForecast {
    pub fn new(day: DayKey, sample: Sample) -> Self {
        let category = PresentationCategory::classify(&sample);
        Self {
            day,
            sample,
            category,
        }
    }
}
