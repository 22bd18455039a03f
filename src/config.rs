//! Configuration management for the `WanderWise` engine
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. The physical
//! constants of the engine (emission factors, flight band cutoffs, score
//! bounds) are fixed and not configurable; configuration covers the
//! request defaults and logging.

use crate::WanderwiseError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Root configuration structure for the `WanderWise` engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WanderwiseConfig {
    /// Default trip choices applied when the caller leaves them open
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default trip choices, stored as user-facing tags
///
/// Tags go through the same fallback parsing as user input, so an
/// unrecognized tag degrades to the documented default instead of
/// failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Transport mode tag (e.g. "flight", "train")
    #[serde(default = "default_transport_mode")]
    pub transport_mode: String,
    /// Accommodation tag (e.g. "hotel_standard", "hostel")
    #[serde(default = "default_accommodation")]
    pub accommodation: String,
    /// Food and activity style tag (e.g. "food_local")
    #[serde(default = "default_activity")]
    pub activity: String,
    /// Trip length in days
    #[serde(default = "default_trip_days")]
    pub trip_days: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_transport_mode() -> String {
    "flight".to_string()
}

fn default_accommodation() -> String {
    "hotel_standard".to_string()
}

fn default_activity() -> String {
    "food_local".to_string()
}

fn default_trip_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            transport_mode: default_transport_mode(),
            accommodation: default_accommodation(),
            activity: default_activity(),
            trip_days: default_trip_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for WanderwiseConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WanderwiseConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with WANDERWISE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WANDERWISE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WanderwiseConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wanderwise").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.defaults.transport_mode.is_empty() {
            self.defaults.transport_mode = default_transport_mode();
        }
        if self.defaults.accommodation.is_empty() {
            self.defaults.accommodation = default_accommodation();
        }
        if self.defaults.activity.is_empty() {
            self.defaults.activity = default_activity();
        }
        if self.defaults.trip_days == 0 {
            self.defaults.trip_days = default_trip_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.defaults.trip_days < 1 {
            return Err(
                WanderwiseError::config("Default trip length must be at least 1 day").into(),
            );
        }

        if self.defaults.trip_days > 365 {
            return Err(
                WanderwiseError::config("Default trip length cannot exceed 365 days").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WanderwiseError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WanderwiseError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

/// Initialize tracing output from the logging configuration
///
/// Intended for the embedding application; the library itself only emits
/// events. A `RUST_LOG` environment filter takes precedence over the
/// configured level. Repeated calls are harmless, later ones keep the
/// first subscriber.
pub fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    if logging.format == "json" {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WanderwiseConfig::default();
        assert_eq!(config.defaults.transport_mode, "flight");
        assert_eq!(config.defaults.accommodation, "hotel_standard");
        assert_eq!(config.defaults.activity, "food_local");
        assert_eq!(config.defaults.trip_days, 7);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(WanderwiseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = WanderwiseConfig::default();
        config.defaults.transport_mode = String::new();
        config.defaults.trip_days = 0;
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.defaults.transport_mode, "flight");
        assert_eq!(config.defaults.trip_days, 7);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WanderwiseConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = WanderwiseConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log format")
        );
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = WanderwiseConfig::default();
        config.defaults.trip_days = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        config.defaults.trip_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = WanderwiseConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("wanderwise"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
