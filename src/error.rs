//! Error types and handling for the `WanderWise` engine

use thiserror::Error;

/// Main error type for the `WanderWise` engine
#[derive(Error, Debug)]
pub enum WanderwiseError {
    /// Coordinate with a non-finite component or outside the valid ranges
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Trip duration below the one-day minimum
    #[error("Invalid duration: {message}")]
    InvalidDuration { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WanderwiseError {
    /// Create a new invalid-coordinate error
    pub fn invalid_coordinate<S: Into<String>>(message: S) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create a new invalid-duration error
    pub fn invalid_duration<S: Into<String>>(message: S) -> Self {
        Self::InvalidDuration {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WanderwiseError::InvalidCoordinate { message } => {
                format!("Invalid coordinates: {message}")
            }
            WanderwiseError::InvalidDuration { message } => {
                format!("Invalid trip length: {message}")
            }
            WanderwiseError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}
