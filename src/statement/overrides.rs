use serde::{Deserialize, Serialize};

use super::config::StatementConfig;
use crate::error::ConfigError;
use crate::result_set::ResultSetOverrides;
use crate::types::ColumnType;

/// Partial statement settings, as read from a configuration file or collected
/// by [`StatementConfigBuilder`](super::StatementConfigBuilder).
///
/// Absent fields keep their current value when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatementOverrides {
    pub prefetch_row_count: Option<u32>,
    pub prefetch_memory_size: Option<u32>,
    pub long_buffer_size: Option<u32>,
    pub long_raw_buffer_size: Option<u32>,
    pub lob_buffer_size: Option<i64>,
    pub string_ptr_buffer_size: Option<i64>,
    pub byte_slice: Option<ColumnType>,
    pub auto_commit: Option<bool>,
    pub false_rune: Option<char>,
    pub true_rune: Option<char>,
    pub result_set: Option<ResultSetOverrides>,
}

impl StatementOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present field to `config` through its validated setter.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a setter; `config` is left
    /// unchanged in that case.
    pub fn apply_to(&self, config: &mut StatementConfig) -> Result<(), ConfigError> {
        let mut scratch = config.clone();

        if let Some(rows) = self.prefetch_row_count {
            scratch.set_prefetch_row_count(rows);
        }
        if let Some(bytes) = self.prefetch_memory_size {
            scratch.set_prefetch_memory_size(bytes);
        }
        if let Some(size) = self.long_buffer_size {
            scratch.set_long_buffer_size(size)?;
        }
        if let Some(size) = self.long_raw_buffer_size {
            scratch.set_long_raw_buffer_size(size)?;
        }
        if let Some(size) = self.lob_buffer_size {
            scratch.set_lob_buffer_size(size)?;
        }
        if let Some(size) = self.string_ptr_buffer_size {
            scratch.set_string_ptr_buffer_size(size)?;
        }
        if let Some(column_type) = self.byte_slice {
            scratch.set_byte_slice(column_type)?;
        }
        if let Some(auto_commit) = self.auto_commit {
            scratch.set_auto_commit(auto_commit);
        }
        if let Some(rune) = self.false_rune {
            scratch.set_false_rune(rune);
        }
        if let Some(rune) = self.true_rune {
            scratch.set_true_rune(rune);
        }
        if let Some(result_set) = &self.result_set {
            result_set.apply_to(scratch.result_set_mut())?;
        }

        tracing::debug!(overrides = ?self, "applied statement overrides");
        *config = scratch;
        Ok(())
    }
}

impl TryFrom<StatementOverrides> for StatementConfig {
    type Error = ConfigError;

    fn try_from(overrides: StatementOverrides) -> Result<Self, Self::Error> {
        let mut config = StatementConfig::default();
        overrides.apply_to(&mut config)?;
        Ok(config)
    }
}
