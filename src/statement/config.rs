use serde::{Deserialize, Serialize};

use super::builder::StatementConfigBuilder;
use super::overrides::StatementOverrides;
use super::prefetch::PrefetchLimit;
use crate::error::ConfigError;
use crate::result_set::ResultSetConfig;
use crate::types::{ColumnCategory, ColumnType};

/// Buffers whose size the binding path reads from a statement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// LONG select-column buffer
    Long,
    /// LONG RAW select-column buffer
    LongRaw,
    /// LOB select-column buffer
    Lob,
    /// Buffer for a nullable string parameter, or each element of a
    /// nullable-string collection parameter
    StringPtr,
}

/// Per-statement configuration.
///
/// Assign values before executing or querying a statement; the execution and
/// binding paths read them at that moment. Fields are only reachable through
/// validated setters, so every instance satisfies the documented bounds:
/// ```rust
/// use sql_stmt_config::prelude::*;
///
/// let mut cfg = StatementConfig::new();
/// cfg.set_long_buffer_size(1 << 20)?;
/// assert!(cfg.set_long_buffer_size(0).is_err());
/// assert_eq!(cfg.long_buffer_size(), 1 << 20);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatementOverrides")]
pub struct StatementConfig {
    prefetch_row_count: u32,
    prefetch_memory_size: u32,
    long_buffer_size: u32,
    long_raw_buffer_size: u32,
    lob_buffer_size: i64,
    string_ptr_buffer_size: i64,
    byte_slice: ColumnType,
    auto_commit: bool,
    false_rune: char,
    true_rune: char,
    result_set: ResultSetConfig,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            prefetch_row_count: Self::DEFAULT_PREFETCH_ROW_COUNT,
            prefetch_memory_size: Self::DEFAULT_PREFETCH_MEMORY_SIZE,
            long_buffer_size: Self::DEFAULT_LONG_BUFFER_SIZE,
            long_raw_buffer_size: Self::DEFAULT_LONG_RAW_BUFFER_SIZE,
            lob_buffer_size: Self::DEFAULT_LOB_BUFFER_SIZE,
            string_ptr_buffer_size: Self::DEFAULT_STRING_PTR_BUFFER_SIZE,
            byte_slice: Self::DEFAULT_BYTE_SLICE,
            auto_commit: true,
            false_rune: Self::DEFAULT_FALSE_RUNE,
            true_rune: Self::DEFAULT_TRUE_RUNE,
            result_set: ResultSetConfig::default(),
        }
    }
}

impl StatementConfig {
    /// Largest LONG, LONG RAW or LOB buffer size.
    ///
    /// The protocol caps these buffers at 2,147,483,643 bytes; one byte is
    /// reserved for the offset the binding path adds when defining the column.
    pub const MAX_BUFFER_SIZE: u32 = 2_147_483_642;

    pub const DEFAULT_PREFETCH_ROW_COUNT: u32 = 0;

    /// 134,217,728 bytes.
    pub const DEFAULT_PREFETCH_MEMORY_SIZE: u32 = 1 << 27;

    /// 16,777,216 bytes. A moderate buffer; the 2GB maximum may not be
    /// feasible on all clients.
    pub const DEFAULT_LONG_BUFFER_SIZE: u32 = 1 << 24;

    /// 16,777,216 bytes.
    pub const DEFAULT_LONG_RAW_BUFFER_SIZE: u32 = 1 << 24;

    /// 16,777,216 bytes.
    pub const DEFAULT_LOB_BUFFER_SIZE: i64 = 1 << 24;

    /// Matches the usual server MAX_STRING_SIZE for VARCHAR2, NVARCHAR2 and RAW
    /// columns; raise it when the server is configured for up to 32,767.
    pub const DEFAULT_STRING_PTR_BUFFER_SIZE: i64 = 4000;

    pub const DEFAULT_BYTE_SLICE: ColumnType = ColumnType::Bits;
    pub const DEFAULT_FALSE_RUNE: char = '0';
    pub const DEFAULT_TRUE_RUNE: char = '1';

    /// A configuration with driver defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> StatementConfigBuilder {
        StatementConfigBuilder::new()
    }

    /// Restore every field, including the embedded result-set defaults, to
    /// driver defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a batch of overrides through the validated setters.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised; `self` is left unchanged in that case.
    pub fn apply(&mut self, overrides: &StatementOverrides) -> Result<(), ConfigError> {
        overrides.apply_to(self)
    }

    /// Number of rows to prefetch during a select query. Default 0.
    ///
    /// Works together with [`prefetch_memory_size`](Self::prefetch_memory_size);
    /// see [`PrefetchLimit`].
    #[must_use]
    pub fn prefetch_row_count(&self) -> u32 {
        self.prefetch_row_count
    }

    pub fn set_prefetch_row_count(&mut self, prefetch_row_count: u32) {
        self.prefetch_row_count = prefetch_row_count;
    }

    /// Prefetch memory size in bytes used during a select query. Default 134,217,728.
    #[must_use]
    pub fn prefetch_memory_size(&self) -> u32 {
        self.prefetch_memory_size
    }

    pub fn set_prefetch_memory_size(&mut self, prefetch_memory_size: u32) {
        self.prefetch_memory_size = prefetch_memory_size;
    }

    /// Prefetch limit the execution path applies before issuing a fetch.
    #[must_use]
    pub fn prefetch_limit(&self) -> PrefetchLimit {
        PrefetchLimit::from_settings(self.prefetch_row_count, self.prefetch_memory_size)
    }

    /// Buffer size in bytes used to define a LONG select column.
    #[must_use]
    pub fn long_buffer_size(&self) -> u32 {
        self.long_buffer_size
    }

    /// Set the LONG buffer size in bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `size` is 0 or greater than [`Self::MAX_BUFFER_SIZE`].
    pub fn set_long_buffer_size(&mut self, size: u32) -> Result<(), ConfigError> {
        check_max("long_buffer_size", i64::from(size))?;
        check_positive("long_buffer_size", i64::from(size))?;
        self.long_buffer_size = size;
        Ok(())
    }

    /// Buffer size in bytes used to define a LONG RAW select column.
    #[must_use]
    pub fn long_raw_buffer_size(&self) -> u32 {
        self.long_raw_buffer_size
    }

    /// Set the LONG RAW buffer size in bytes. Zero is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `size` is greater than [`Self::MAX_BUFFER_SIZE`].
    pub fn set_long_raw_buffer_size(&mut self, size: u32) -> Result<(), ConfigError> {
        check_max("long_raw_buffer_size", i64::from(size))?;
        self.long_raw_buffer_size = size;
        Ok(())
    }

    /// Buffer size in bytes used to define a LOB select column.
    #[must_use]
    pub fn lob_buffer_size(&self) -> i64 {
        self.lob_buffer_size
    }

    /// Set the LOB buffer size in bytes. No lower bound is enforced.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `size` is greater than [`Self::MAX_BUFFER_SIZE`].
    pub fn set_lob_buffer_size(&mut self, size: i64) -> Result<(), ConfigError> {
        check_max("lob_buffer_size", size)?;
        self.lob_buffer_size = size;
        Ok(())
    }

    /// Buffer size in bytes for binding a nullable string parameter. Default 4000.
    #[must_use]
    pub fn string_ptr_buffer_size(&self) -> i64 {
        self.string_ptr_buffer_size
    }

    /// Set the nullable-string parameter buffer size in bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotPositive` if `size` is less than 1.
    pub fn set_string_ptr_buffer_size(&mut self, size: i64) -> Result<(), ConfigError> {
        check_positive("string_ptr_buffer_size", size)?;
        self.string_ptr_buffer_size = size;
        Ok(())
    }

    /// Size of the buffer the binding path reserves for `kind`.
    ///
    /// `None` only when a negative LOB size was configured.
    #[must_use]
    pub fn buffer_size(&self, kind: BufferKind) -> Option<usize> {
        match kind {
            BufferKind::Long => usize::try_from(self.long_buffer_size).ok(),
            BufferKind::LongRaw => usize::try_from(self.long_raw_buffer_size).ok(),
            BufferKind::Lob => usize::try_from(self.lob_buffer_size).ok(),
            BufferKind::StringPtr => usize::try_from(self.string_ptr_buffer_size).ok(),
        }
    }

    /// Column type used for a byte-slice parameter whose destination type is
    /// otherwise unknown. Default [`ColumnType::Bits`].
    ///
    /// Use `Bits` when the destination column is BLOB, RAW or LONG RAW, and
    /// `U8` when it is NUMBER, BINARY_DOUBLE, BINARY_FLOAT or FLOAT.
    #[must_use]
    pub fn byte_slice(&self) -> ColumnType {
        self.byte_slice
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidColumnType` unless `column_type` is `U8` or `Bits`.
    pub fn set_byte_slice(&mut self, column_type: ColumnType) -> Result<(), ConfigError> {
        ColumnCategory::BitsOrU8.check("byte_slice", column_type)?;
        self.byte_slice = column_type;
        Ok(())
    }

    /// Whether DML statements commit automatically. Default `true`.
    ///
    /// Not observed while an explicit transaction is open.
    #[must_use]
    pub fn is_auto_commit(&self) -> bool {
        self.auto_commit
    }

    pub fn set_auto_commit(&mut self, auto_commit: bool) {
        self.auto_commit = auto_commit;
    }

    /// Whether the commit logic should commit right after executing.
    #[must_use]
    pub fn commits_after_execute(&self, in_transaction: bool) -> bool {
        self.auto_commit && !in_transaction
    }

    /// Rune sent for a `false` boolean parameter. Default `'0'`.
    #[must_use]
    pub fn false_rune(&self) -> char {
        self.false_rune
    }

    pub fn set_false_rune(&mut self, rune: char) {
        self.false_rune = rune;
    }

    /// Rune sent for a `true` boolean parameter. Default `'1'`.
    #[must_use]
    pub fn true_rune(&self) -> char {
        self.true_rune
    }

    pub fn set_true_rune(&mut self, rune: char) {
        self.true_rune = rune;
    }

    #[must_use]
    pub fn encode_bool(&self, value: bool) -> char {
        if value { self.true_rune } else { self.false_rune }
    }

    /// Result-set defaults propagated to result sets produced by this statement.
    #[must_use]
    pub fn result_set(&self) -> &ResultSetConfig {
        &self.result_set
    }

    pub fn result_set_mut(&mut self) -> &mut ResultSetConfig {
        &mut self.result_set
    }
}

fn check_max(setting: &'static str, size: i64) -> Result<(), ConfigError> {
    let max = i64::from(StatementConfig::MAX_BUFFER_SIZE);
    if size > max {
        return Err(ConfigError::TooLarge {
            setting,
            value: size,
            max,
        });
    }
    Ok(())
}

fn check_positive(setting: &'static str, size: i64) -> Result<(), ConfigError> {
    if size < 1 {
        return Err(ConfigError::NotPositive {
            setting,
            value: size,
        });
    }
    Ok(())
}
