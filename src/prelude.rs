//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types so callers can
//! configure statements with a single `use`.

pub use crate::error::ConfigError;
pub use crate::result_set::{ResultSetConfig, ResultSetOverrides, ServerColumn};
pub use crate::statement::{
    BufferKind, PrefetchLimit, StatementConfig, StatementConfigBuilder, StatementOverrides,
};
pub use crate::types::{ColumnCategory, ColumnType};
