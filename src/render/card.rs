//! Presentation of a single day: everything a card needs, already formatted.

use crate::types::daily_forecast::DailyForecast;
use crate::types::presentation_category::PresentationCategory;
use serde::Serialize;

pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// URL of the large (2x) OpenWeather icon for `icon_code`.
///
/// ```
/// assert_eq!(
///     dayforecast::icon_url("10d"),
///     "https://openweathermap.org/img/wn/10d@2x.png"
/// );
/// ```
pub fn icon_url(icon_code: &str) -> String {
    format!("{}/{}@2x.png", ICON_BASE_URL, icon_code)
}

/// Background gradient of a card, as two colour stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub from: &'static str,
    pub to: &'static str,
}

impl Theme {
    pub fn for_category(category: PresentationCategory) -> Self {
        let (from, to) = match category {
            PresentationCategory::Rain => ("blue-200", "blue-500"),
            PresentationCategory::Cloud => ("gray-200", "gray-400"),
            PresentationCategory::Clear => ("yellow-100", "orange-300"),
            PresentationCategory::Other => ("sky-100", "blue-300"),
        };
        Theme { from, to }
    }

    /// Tailwind-style gradient classes, e.g. `from-blue-200 to-blue-500`.
    pub fn css_classes(&self) -> String {
        format!("from-{} to-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub date_label: String,
    pub icon_url: String,
    /// Raw description, used as the icon's alt text.
    pub icon_alt: String,
    /// Description with every word capitalised.
    pub description: String,
    /// Whole °C.
    pub temperature: i64,
    /// Whole m/s.
    pub wind_speed: i64,
    pub category: PresentationCategory,
    pub theme: Theme,
}

impl From<&DailyForecast> for ForecastCard {
    fn from(day: &DailyForecast) -> Self {
        let sample = &day.sample;
        ForecastCard {
            date_label: day.day.to_string(),
            icon_url: icon_url(&sample.icon_code),
            icon_alt: sample.condition_description.clone(),
            description: capitalize_words(&sample.condition_description),
            temperature: round_half_up(sample.temperature),
            wind_speed: round_half_up(sample.wind_speed),
            category: day.category,
            theme: Theme::for_category(day.category),
        }
    }
}

/// Halves round towards positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
