use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Client-side representation chosen for a column or parameter value.
///
/// Used both for the statement's byte-slice coercion and for the per-column
/// mapping held by [`ResultSetConfig`](crate::ResultSetConfig):
/// ```rust
/// use clap::ValueEnum;
/// use sql_stmt_config::prelude::*;
///
/// let parsed = ColumnType::from_str("u8", true).unwrap();
/// assert_eq!(parsed, ColumnType::U8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Signed 64-bit integer
    I64,
    /// Signed 32-bit integer
    I32,
    /// Signed 16-bit integer
    I16,
    /// Signed 8-bit integer
    I8,
    /// Unsigned 64-bit integer
    U64,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 8-bit integer; for byte slices, one number per byte
    U8,
    /// 64-bit float
    F64,
    /// 32-bit float
    F32,
    /// Arbitrary-precision number kept in its decimal text form
    Num,
    /// Date/time value
    Time,
    /// Text
    Str,
    /// Boolean
    Bool,
    /// Raw bit pattern
    Bits,
}

impl ColumnType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::I64 => "i64",
            ColumnType::I32 => "i32",
            ColumnType::I16 => "i16",
            ColumnType::I8 => "i8",
            ColumnType::U64 => "u64",
            ColumnType::U32 => "u32",
            ColumnType::U16 => "u16",
            ColumnType::U8 => "u8",
            ColumnType::F64 => "f64",
            ColumnType::F32 => "f32",
            ColumnType::Num => "num",
            ColumnType::Time => "time",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
            ColumnType::Bits => "bits",
        }
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnType::I64
                | ColumnType::I32
                | ColumnType::I16
                | ColumnType::I8
                | ColumnType::U64
                | ColumnType::U32
                | ColumnType::U16
                | ColumnType::U8
                | ColumnType::F64
                | ColumnType::F32
                | ColumnType::Num
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group of column types a setting accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCategory {
    /// Any number type, or text holding the number's decimal form.
    Numeric,
    /// Date/time only.
    Time,
    /// Boolean or text.
    BoolOrString,
    /// Text only.
    String,
    /// Raw bits or unsigned bytes.
    BitsOrU8,
}

impl ColumnCategory {
    #[must_use]
    pub fn accepts(self, column_type: ColumnType) -> bool {
        match self {
            ColumnCategory::Numeric => column_type.is_numeric() || column_type == ColumnType::Str,
            ColumnCategory::Time => column_type == ColumnType::Time,
            ColumnCategory::BoolOrString => {
                matches!(column_type, ColumnType::Bool | ColumnType::Str)
            }
            ColumnCategory::String => column_type == ColumnType::Str,
            ColumnCategory::BitsOrU8 => matches!(column_type, ColumnType::Bits | ColumnType::U8),
        }
    }

    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            ColumnCategory::Numeric => "i64, i32, i16, i8, u64, u32, u16, u8, f64, f32, num or str",
            ColumnCategory::Time => "time",
            ColumnCategory::BoolOrString => "bool or str",
            ColumnCategory::String => "str",
            ColumnCategory::BitsOrU8 => "bits or u8",
        }
    }

    /// Check `column_type` against this category for the named setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidColumnType` if the category does not accept `column_type`.
    pub fn check(self, setting: &'static str, column_type: ColumnType) -> Result<(), ConfigError> {
        if self.accepts(column_type) {
            Ok(())
        } else {
            Err(ConfigError::InvalidColumnType {
                setting,
                column_type,
                expected: self.describe(),
            })
        }
    }
}
