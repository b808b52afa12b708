use thiserror::Error;

use crate::types::ColumnType;

/// Error returned when a configuration value violates a documented bound.
///
/// Setters return this synchronously and leave the receiver untouched, so a
/// caller can always recover by retrying with a corrected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {setting} too large: {value} exceeds the maximum of {max}")]
    TooLarge {
        setting: &'static str,
        value: i64,
        max: i64,
    },

    #[error("Configuration error: {setting} must be greater than zero, got {value}")]
    NotPositive { setting: &'static str, value: i64 },

    #[error("Configuration error: {setting} does not accept {column_type}; valid values are {expected}")]
    InvalidColumnType {
        setting: &'static str,
        column_type: ColumnType,
        expected: &'static str,
    },

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Configuration io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
