//! Configuration errors.

use super::error_code::{self, PricingErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl PricingErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::ValidationFailed { .. } | Self::InvalidValue { .. } => {
                error_code::CONFIG_ERROR
            }
        }
    }
}
