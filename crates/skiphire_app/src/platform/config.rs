use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use skiphire_core::{Location, LocationError};
use skiphire_engine::{ListingError, ListingSettings, DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH};

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "skiphire.ron";
const CONFIG_ENV: &str = "SKIPHIRE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid default location: {0}")]
    Location(#[from] LocationError),
    #[error("invalid listing endpoint: {0}")]
    Endpoint(#[from] ListingError),
}

/// Settings read from `skiphire.ron`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub default_postcode: String,
    pub default_area: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            default_postcode: "NR32".to_string(),
            default_area: Some("Lowestoft".to_string()),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads from `$SKIPHIRE_CONFIG`, else `./skiphire.ron`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
        Self::load_from(&path)
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let location = self.default_location()?;
        self.listing_settings().url_for(&location)?;
        Ok(())
    }

    pub fn default_location(&self) -> Result<Location, LocationError> {
        Location::new(&self.default_postcode, self.default_area.as_deref())
    }

    pub fn listing_settings(&self) -> ListingSettings {
        ListingSettings {
            base_url: self.base_url.clone(),
            endpoint_path: self.endpoint_path.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// `None` when the configured name is not a level. Parsed without logging
    /// because the logger is set up from the result.
    pub fn log_level(&self) -> Option<LevelFilter> {
        skiphire_logging::parse_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.default_location().unwrap(),
            Location::new("NR32", Some("Lowestoft")).unwrap()
        );
        assert_eq!(config.listing_settings().request_timeout, None);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skiphire.ron");
        fs::write(
            &path,
            r#"(
                base_url: "http://localhost:9000",
                default_postcode: "LE10",
                default_area: None,
                request_timeout_secs: Some(15),
                log_destination: Both,
                log_level: "debug",
            )"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.endpoint_path, DEFAULT_ENDPOINT_PATH);
        assert_eq!(config.default_location().unwrap(), Location::new("LE10", None).unwrap());
        assert_eq!(
            config.listing_settings().request_timeout,
            Some(Duration::from_secs(15))
        );
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level(), Some(LevelFilter::Debug));
    }

    #[test]
    fn unknown_log_level_is_reported_to_the_caller() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skiphire.ron");
        fs::write(&path, r#"(log_level: "chatty")"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level(), None);
        assert_eq!(AppConfig::default().log_level(), Some(LevelFilter::Info));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skiphire.ron");
        fs::write(&path, "(base_url: 42)").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn blank_default_postcode_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skiphire.ron");
        fs::write(&path, r#"(default_postcode: "  ")"#).unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Location(LocationError::EmptyPostcode))
        ));
    }

    #[test]
    fn unusable_base_url_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skiphire.ron");
        fs::write(&path, r#"(base_url: "nowhere")"#).unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Endpoint(_))
        ));
    }
}
