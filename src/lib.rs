//! Per-statement configuration for SQL drivers.
//!
//! A [`StatementConfig`] carries the tunables a driver reads when it executes a
//! statement or fetches its rows: prefetch limits, LONG / LONG RAW / LOB and
//! nullable-string buffer sizes, how an ambiguous byte slice is bound, the
//! runes used for boolean parameters, auto-commit, and the result-set defaults
//! in an embedded [`ResultSetConfig`].
//!
//! ```rust
//! use sql_stmt_config::prelude::*;
//!
//! let mut cfg = StatementConfig::new();
//! cfg.set_prefetch_row_count(500);
//! cfg.set_byte_slice(ColumnType::U8)?;
//! cfg.result_set_mut()
//!     .set_column_type(ServerColumn::Char1, ColumnType::Str)?;
//!
//! assert_eq!(cfg.prefetch_limit().bound(), 500);
//! assert!(cfg.set_long_buffer_size(StatementConfig::MAX_BUFFER_SIZE + 1).is_err());
//! # Ok::<(), ConfigError>(())
//! ```

pub mod error;
pub mod prelude;
pub mod result_set;
pub mod statement;
pub mod types;

pub use error::ConfigError;
pub use result_set::{ResultSetConfig, ResultSetOverrides, ServerColumn};
pub use statement::{
    BufferKind, PrefetchLimit, StatementConfig, StatementConfigBuilder, StatementOverrides,
};
pub use types::{ColumnCategory, ColumnType};
