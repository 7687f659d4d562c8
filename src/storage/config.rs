//! Coach profile and application configuration.
//!
//! Configuration is a TOML file in the platform data directory. A missing
//! file yields defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::metrics::error::MetricsResult;
use crate::metrics::zones::HeartRateZones;

/// Coach profile used for defaults in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachProfile {
    /// Display name
    pub name: String,
    /// Maximum heart rate used when none is given explicitly
    pub max_heart_rate: Option<i32>,
}

impl Default for CoachProfile {
    fn default() -> Self {
        Self {
            name: "Coach".to_string(),
            max_heart_rate: None,
        }
    }
}

impl CoachProfile {
    /// Heart rate zones for the profile's maximum heart rate, if one is set.
    pub fn heart_rate_zones(&self) -> Option<MetricsResult<HeartRateZones>> {
        self.max_heart_rate.map(HeartRateZones::from_max_hr)
    }
}

/// Dashboard-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Dataset used when no path is given on the command line
    pub dataset_path: Option<PathBuf>,
    /// Number of participants listed per challenge
    pub top_participants: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            top_participants: 3,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Coach profile
    pub coach: CoachProfile,
    /// Dashboard settings
    pub dashboard: DashboardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            coach: CoachProfile::default(),
            dashboard: DashboardSettings::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "treinogo", "TreinoGO")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;
    tracing::info!(path = %path.display(), "loaded config");

    Ok(config)
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = to_toml(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Render a configuration as TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
