// SPDX-License-Identifier: MIT

//! Typed error handling for nimbus-rs

use crate::filter::FilterError;
use thiserror::Error;

/// Top-level error type for nimbus-rs
#[derive(Debug, Error)]
pub enum NimbusError {
    /// Filter expression rejected at compile time
    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),

    /// Configuration errors (bad poll config, unknown products)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl NimbusError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_wraps() {
        let err = NimbusError::from(FilterError::IncompleteCondition);
        assert!(err.to_string().contains("without product"));
    }

    #[test]
    fn test_config_helper() {
        let err = NimbusError::config("bad period");
        assert_eq!(err.to_string(), "Configuration error: bad period");
    }
}
