//! Application configuration: the API key, the location and how many days to show.

use crate::reducer::reduce::DEFAULT_DAY_LIMIT;
use crate::source::open_weather::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::lat_lon::LatLon;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const DAY_LIMIT_VAR: &str = "FORECAST_DAY_LIMIT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration file '{0}'")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("No API key configured, set OPENWEATHER_API_KEY or 'api_key' in the configuration file")]
    MissingApiKey,

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Everything the surrounding application needs to fetch and reduce a forecast.
///
/// A TOML file only needs the keys it wants to change:
///
/// ```toml
/// api_key = "..."
/// place_name = "Paris"
/// location = [48.8566, 2.3522]
/// day_limit = 3
/// ```
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub api_key: String,
    pub location: LatLon,
    pub place_name: String,
    pub day_limit: usize,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            location: LatLon::LONDON,
            place_name: "London".to_string(),
            day_limit: DEFAULT_DAY_LIMIT,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The API key is never printed.
impl fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("api_key", &"<redacted>")
            .field("location", &self.location)
            .field("place_name", &self.place_name)
            .field("day_limit", &self.day_limit)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ForecastConfig {
    /// Loads a TOML configuration file, then applies environment overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - path to the configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::read_file(path.as_ref())?.apply_env()
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let toml = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        toml::from_str(&toml).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Builds a configuration from defaults and the environment alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        ForecastConfig::default().apply_env()
    }

    /// Overrides the API key and day limit from `OPENWEATHER_API_KEY` and
    /// `FORECAST_DAY_LIMIT` when set, then validates the result.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(env::var(API_KEY_VAR).ok(), env::var(DAY_LIMIT_VAR).ok())
    }

    fn apply_vars(
        mut self,
        api_key: Option<String>,
        day_limit: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        if let Some(limit) = day_limit {
            self.day_limit = limit
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    name: DAY_LIMIT_VAR.to_string(),
                    message: e.to_string(),
                })?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.day_limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "day_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn parse(content: &str) -> ForecastConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse(
            r#"
            api_key = "abc"
            day_limit = 3
            "#,
        );
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.day_limit, 3);
        assert_eq!(config.location, LatLon::LONDON);
        assert_eq!(config.place_name, "London");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_location_as_array() {
        let config = parse(
            r#"
            place_name = "Paris"
            location = [48.8566, 2.3522]
            "#,
        );
        assert_eq!(config.location, LatLon(48.8566, 2.3522));
        assert_eq!(config.place_name, "Paris");
    }

    #[test]
    fn test_env_values_override_file() {
        let config = parse(r#"api_key = "from-file""#)
            .apply_vars(Some("from-env".to_string()), Some(" 4 ".to_string()))
            .unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.day_limit, 4);
    }

    #[test]
    fn test_blank_env_key_does_not_override() {
        let config = parse(r#"api_key = "from-file""#)
            .apply_vars(Some("  ".to_string()), None)
            .unwrap();
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = parse(r#"api_key = "very-secret""#);
        assert!(!format!("{:?}", config).contains("very-secret"));
    }

    #[test]
    fn test_missing_api_key() {
        let result = ForecastConfig::default().apply_vars(None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_invalid_day_limits() {
        let zero = parse(r#"api_key = "k""#).apply_vars(None, Some("0".to_string()));
        assert!(matches!(zero, Err(ConfigError::InvalidValue { .. })));

        let negative = parse(r#"api_key = "k""#).apply_vars(None, Some("-2".to_string()));
        assert!(matches!(negative, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_load_reports_path_on_errors() {
        let file = write_config("day_limit = \"five\"");
        match ForecastConfig::read_file(file.path()) {
            Err(ConfigError::Parse(path, _)) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }

        let missing = ForecastConfig::load("/definitely/not/here.toml");
        assert!(matches!(missing, Err(ConfigError::Read(_, _))));
        let missing = ForecastConfig::read_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(ConfigError::Read(_, _))));
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_config(
            r#"
            api_key = "file-key"
            place_name = "Oslo"
            location = [59.9139, 10.7522]
            day_limit = 2
            "#,
        );
        let config = ForecastConfig::read_file(file.path())
            .unwrap()
            .apply_vars(None, None)
            .unwrap();
        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.place_name, "Oslo");
        assert_eq!(config.location, LatLon(59.9139, 10.7522));
        assert_eq!(config.day_limit, 2);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
