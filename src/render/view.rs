use crate::error::ForecastError;
use crate::render::card::ForecastCard;
use crate::types::daily_forecast::DailyForecast;
use log::warn;

/// What the user sees for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastView {
    /// The fetch has not completed yet.
    Loading,
    /// Fetching or reducing failed. Holds the single user-facing message.
    Failed(String),
    /// The forecast came back without any usable day.
    Empty,
    Ready(Vec<ForecastCard>),
}

impl ForecastView {
    /// Collapses the outcome of a fetch into a view. Every kind of failure ends up as one
    /// message; the structured error is only logged.
    pub fn from_result(result: Result<Vec<DailyForecast>, ForecastError>) -> Self {
        match result {
            Ok(days) if days.is_empty() => ForecastView::Empty,
            Ok(days) => ForecastView::Ready(days.iter().map(ForecastCard::from).collect()),
            Err(e) => {
                warn!("Forecast unavailable: {:?}", e);
                ForecastView::Failed(e.to_string())
            }
        }
    }
}

/// Turns a [`ForecastView`] into output.
pub trait Renderer {
    fn render(&self, view: &ForecastView) -> String;
}

/// Renders cards as plain text blocks, one per day.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    place_name: String,
}

impl TextRenderer {
    pub fn new(place_name: impl Into<String>) -> Self {
        Self {
            place_name: place_name.into(),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &ForecastView) -> String {
        match view {
            ForecastView::Loading => "Loading...".to_string(),
            ForecastView::Failed(message) => format!("Error: {}", message),
            ForecastView::Empty => "No data available".to_string(),
            ForecastView::Ready(cards) => {
                let mut out = format!(
                    "{}-Day Weather Forecast for {}\n",
                    cards.len(),
                    self.place_name
                );
                for card in cards {
                    out.push_str(&format!(
                        "\n{} [{}]\n  {}\n  🌡️ {}°C\n  💨 {} m/s\n  {}\n",
                        card.date_label,
                        card.category,
                        card.description,
                        card.temperature,
                        card.wind_speed,
                        card.icon_url
                    ));
                }
                out
            }
        }
    }
}
