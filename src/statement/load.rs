use std::path::Path;

use super::config::StatementConfig;
use crate::error::ConfigError;

impl StatementConfig {
    /// Parse a JSON document of statement overrides on top of driver defaults.
    ///
    /// Absent keys keep their defaults; unknown keys are rejected.
    /// ```rust
    /// use sql_stmt_config::prelude::*;
    ///
    /// let cfg = StatementConfig::from_json_str(r#"{ "prefetch_row_count": 64 }"#)?;
    /// assert_eq!(cfg.prefetch_row_count(), 64);
    /// assert_eq!(cfg.long_buffer_size(), StatementConfig::DEFAULT_LONG_BUFFER_SIZE);
    /// # Ok::<(), ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is malformed or a value
    /// violates a setter's bound.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON document of statement overrides from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading statement config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize every field, including the result-set defaults, as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
