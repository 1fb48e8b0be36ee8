//! Defines the `PresentationCategory` enum, the coarse visual theme a day card is drawn
//! with, and the ordered rule table that derives it from a sample's condition text.

use crate::types::sample::Sample;
use serde::Serialize;
use std::fmt;

/// Coarse visual classification of a day's weather.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationCategory {
    /// Any kind of rain, including drizzle reported as "light rain".
    Rain,
    /// Clouds of any coverage.
    Cloud,
    /// Clear sky.
    Clear,
    /// Everything else: mist, fog, snow, thunderstorms, ...
    Other,
}

/// Classification rules in priority order. The first needle found wins, so text that
/// mentions both rain and clouds is classified as rain.
const RULES: [(&str, PresentationCategory); 3] = [
    ("rain", PresentationCategory::Rain),
    ("cloud", PresentationCategory::Cloud),
    ("clear", PresentationCategory::Clear),
];

impl PresentationCategory {
    /// Classifies a single piece of condition text.
    ///
    /// Matching is a case-insensitive substring search over the rule table, rain before cloud before clear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dayforecast::PresentationCategory;
    ///
    /// assert_eq!(PresentationCategory::from_text("Light Rain"), Some(PresentationCategory::Rain));
    /// assert_eq!(PresentationCategory::from_text("few clouds"), Some(PresentationCategory::Cloud));
    /// assert_eq!(PresentationCategory::from_text("Mist"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, category)| *category)
    }

    /// Derives the category of a sample.
    ///
    /// `condition_main` is consulted first. The description is only used when the main
    /// condition matches no rule, and [`PresentationCategory::Other`] is the fallback.
    pub fn classify(sample: &Sample) -> Self {
        Self::from_text(&sample.condition_main)
            .or_else(|| Self::from_text(&sample.condition_description))
            .unwrap_or(PresentationCategory::Other)
    }

    fn as_str(&self) -> &'static str {
        match self {
            PresentationCategory::Rain => "rain",
            PresentationCategory::Cloud => "cloud",
            PresentationCategory::Clear => "clear",
            PresentationCategory::Other => "other",
        }
    }
}

impl fmt::Display for PresentationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
