use super::config::StatementConfig;
use super::overrides::StatementOverrides;
use crate::error::ConfigError;
use crate::result_set::{ResultSetOverrides, ServerColumn};
use crate::types::ColumnType;

/// Fluent builder for [`StatementConfig`].
///
/// Chained calls only record the requested values; validation happens once in
/// [`build`](Self::build):
/// ```rust
/// use sql_stmt_config::prelude::*;
///
/// let cfg = StatementConfig::builder()
///     .prefetch_row_count(100)
///     .byte_slice(ColumnType::U8)
///     .column_type(ServerColumn::Char1, ColumnType::Str)
///     .build()?;
/// assert_eq!(cfg.byte_slice(), ColumnType::U8);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementConfigBuilder {
    overrides: StatementOverrides,
}

impl StatementConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefetch_row_count(mut self, rows: u32) -> Self {
        self.overrides.prefetch_row_count = Some(rows);
        self
    }

    #[must_use]
    pub fn prefetch_memory_size(mut self, bytes: u32) -> Self {
        self.overrides.prefetch_memory_size = Some(bytes);
        self
    }

    #[must_use]
    pub fn long_buffer_size(mut self, size: u32) -> Self {
        self.overrides.long_buffer_size = Some(size);
        self
    }

    #[must_use]
    pub fn long_raw_buffer_size(mut self, size: u32) -> Self {
        self.overrides.long_raw_buffer_size = Some(size);
        self
    }

    #[must_use]
    pub fn lob_buffer_size(mut self, size: i64) -> Self {
        self.overrides.lob_buffer_size = Some(size);
        self
    }

    #[must_use]
    pub fn string_ptr_buffer_size(mut self, size: i64) -> Self {
        self.overrides.string_ptr_buffer_size = Some(size);
        self
    }

    #[must_use]
    pub fn byte_slice(mut self, column_type: ColumnType) -> Self {
        self.overrides.byte_slice = Some(column_type);
        self
    }

    #[must_use]
    pub fn auto_commit(mut self, auto_commit: bool) -> Self {
        self.overrides.auto_commit = Some(auto_commit);
        self
    }

    #[must_use]
    pub fn bool_runes(mut self, false_rune: char, true_rune: char) -> Self {
        self.overrides.false_rune = Some(false_rune);
        self.overrides.true_rune = Some(true_rune);
        self
    }

    /// Map a server column kind to a client type in the embedded result-set defaults.
    #[must_use]
    pub fn column_type(mut self, column: ServerColumn, column_type: ColumnType) -> Self {
        self.overrides
            .result_set
            .get_or_insert_with(ResultSetOverrides::default)
            .set(column, column_type);
        self
    }

    #[must_use]
    pub fn result_set_true_rune(mut self, rune: char) -> Self {
        self.overrides
            .result_set
            .get_or_insert_with(ResultSetOverrides::default)
            .true_rune = Some(rune);
        self
    }

    #[must_use]
    pub fn finish(self) -> StatementOverrides {
        self.overrides
    }

    /// Build a [`StatementConfig`] from driver defaults plus the recorded values.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a validated setter.
    pub fn build(self) -> Result<StatementConfig, ConfigError> {
        StatementConfig::try_from(self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_calls_overwrite_earlier_ones() {
        let cfg = StatementConfig::builder()
            .long_buffer_size(0)
            .long_buffer_size(4096)
            .build()
            .unwrap();
        assert_eq!(cfg.long_buffer_size(), 4096);
    }

    #[test]
    fn invalid_result_set_mapping_fails_build() {
        let err = StatementConfig::builder()
            .column_type(ServerColumn::Raw, ColumnType::Time)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColumnType { setting: "raw", .. }
        ));
    }

    #[test]
    fn finish_exposes_recorded_overrides() {
        let overrides = StatementConfigBuilder::new()
            .bool_runes('F', 'T')
            .result_set_true_rune('Y')
            .finish();
        assert_eq!(overrides.false_rune, Some('F'));
        assert_eq!(overrides.true_rune, Some('T'));
        assert_eq!(
            overrides.result_set.and_then(|rs| rs.true_rune),
            Some('Y')
        );
    }
}
