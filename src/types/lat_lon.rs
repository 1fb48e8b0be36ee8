use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use dayforecast::LatLon;
///
/// let london = LatLon::LONDON;
/// assert_eq!(london.0, 51.5072); // Latitude
/// assert_eq!(london.1, -0.1276); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Central London, the location forecasts are fetched for unless configured otherwise.
    pub const LONDON: LatLon = LatLon(51.5072, -0.1276);

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

impl Default for LatLon {
    fn default() -> Self {
        Self::LONDON
    }
}
