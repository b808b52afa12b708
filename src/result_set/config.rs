use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{ColumnCategory, ColumnType};

/// Server-side column kinds whose client representation is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerColumn {
    /// NUMBER with zero scale that fits a 64-bit integer
    NumberInt,
    /// NUMBER with zero scale wider than a 64-bit integer
    NumberBigInt,
    /// NUMBER with non-zero scale that fits a 64-bit float
    NumberFloat,
    /// NUMBER with non-zero scale wider than a 64-bit float
    NumberBigFloat,
    BinaryDouble,
    BinaryFloat,
    Float,
    Date,
    Timestamp,
    TimestampTz,
    TimestampLtz,
    /// CHAR(1) / NCHAR(1), commonly used as a boolean flag
    Char1,
    Char,
    Varchar,
    Long,
    Clob,
    Blob,
    Raw,
    LongRaw,
}

impl ServerColumn {
    pub const ALL: [ServerColumn; 19] = [
        ServerColumn::NumberInt,
        ServerColumn::NumberBigInt,
        ServerColumn::NumberFloat,
        ServerColumn::NumberBigFloat,
        ServerColumn::BinaryDouble,
        ServerColumn::BinaryFloat,
        ServerColumn::Float,
        ServerColumn::Date,
        ServerColumn::Timestamp,
        ServerColumn::TimestampTz,
        ServerColumn::TimestampLtz,
        ServerColumn::Char1,
        ServerColumn::Char,
        ServerColumn::Varchar,
        ServerColumn::Long,
        ServerColumn::Clob,
        ServerColumn::Blob,
        ServerColumn::Raw,
        ServerColumn::LongRaw,
    ];

    /// Name used in error messages and configuration files.
    #[must_use]
    pub fn setting_name(self) -> &'static str {
        match self {
            ServerColumn::NumberInt => "number_int",
            ServerColumn::NumberBigInt => "number_big_int",
            ServerColumn::NumberFloat => "number_float",
            ServerColumn::NumberBigFloat => "number_big_float",
            ServerColumn::BinaryDouble => "binary_double",
            ServerColumn::BinaryFloat => "binary_float",
            ServerColumn::Float => "float",
            ServerColumn::Date => "date",
            ServerColumn::Timestamp => "timestamp",
            ServerColumn::TimestampTz => "timestamp_tz",
            ServerColumn::TimestampLtz => "timestamp_ltz",
            ServerColumn::Char1 => "char1",
            ServerColumn::Char => "char",
            ServerColumn::Varchar => "varchar",
            ServerColumn::Long => "long",
            ServerColumn::Clob => "clob",
            ServerColumn::Blob => "blob",
            ServerColumn::Raw => "raw",
            ServerColumn::LongRaw => "long_raw",
        }
    }

    #[must_use]
    pub fn category(self) -> ColumnCategory {
        match self {
            ServerColumn::NumberInt
            | ServerColumn::NumberBigInt
            | ServerColumn::NumberFloat
            | ServerColumn::NumberBigFloat
            | ServerColumn::BinaryDouble
            | ServerColumn::BinaryFloat
            | ServerColumn::Float => ColumnCategory::Numeric,
            ServerColumn::Date
            | ServerColumn::Timestamp
            | ServerColumn::TimestampTz
            | ServerColumn::TimestampLtz => ColumnCategory::Time,
            ServerColumn::Char1 => ColumnCategory::BoolOrString,
            ServerColumn::Char | ServerColumn::Varchar | ServerColumn::Long | ServerColumn::Clob => {
                ColumnCategory::String
            }
            ServerColumn::Blob | ServerColumn::Raw | ServerColumn::LongRaw => {
                ColumnCategory::BitsOrU8
            }
        }
    }

    #[must_use]
    pub fn default_column_type(self) -> ColumnType {
        match self {
            ServerColumn::NumberInt => ColumnType::I64,
            ServerColumn::NumberBigInt | ServerColumn::NumberBigFloat => ColumnType::Num,
            ServerColumn::NumberFloat | ServerColumn::BinaryDouble | ServerColumn::Float => {
                ColumnType::F64
            }
            ServerColumn::BinaryFloat => ColumnType::F32,
            ServerColumn::Date
            | ServerColumn::Timestamp
            | ServerColumn::TimestampTz
            | ServerColumn::TimestampLtz => ColumnType::Time,
            ServerColumn::Char1 => ColumnType::Bool,
            ServerColumn::Char | ServerColumn::Varchar | ServerColumn::Long | ServerColumn::Clob => {
                ColumnType::Str
            }
            ServerColumn::Blob | ServerColumn::Raw | ServerColumn::LongRaw => ColumnType::Bits,
        }
    }
}

/// Result-set defaults carried by a statement.
///
/// Maps each [`ServerColumn`] to the [`ColumnType`] used when a select column
/// of that kind is defined, and holds the rune that decodes a CHAR(1) column
/// to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResultSetOverrides")]
pub struct ResultSetConfig {
    number_int: ColumnType,
    number_big_int: ColumnType,
    number_float: ColumnType,
    number_big_float: ColumnType,
    binary_double: ColumnType,
    binary_float: ColumnType,
    float: ColumnType,
    date: ColumnType,
    timestamp: ColumnType,
    timestamp_tz: ColumnType,
    timestamp_ltz: ColumnType,
    char1: ColumnType,
    char: ColumnType,
    varchar: ColumnType,
    long: ColumnType,
    clob: ColumnType,
    blob: ColumnType,
    raw: ColumnType,
    long_raw: ColumnType,
    true_rune: char,
}

impl Default for ResultSetConfig {
    fn default() -> Self {
        Self {
            number_int: ServerColumn::NumberInt.default_column_type(),
            number_big_int: ServerColumn::NumberBigInt.default_column_type(),
            number_float: ServerColumn::NumberFloat.default_column_type(),
            number_big_float: ServerColumn::NumberBigFloat.default_column_type(),
            binary_double: ServerColumn::BinaryDouble.default_column_type(),
            binary_float: ServerColumn::BinaryFloat.default_column_type(),
            float: ServerColumn::Float.default_column_type(),
            date: ServerColumn::Date.default_column_type(),
            timestamp: ServerColumn::Timestamp.default_column_type(),
            timestamp_tz: ServerColumn::TimestampTz.default_column_type(),
            timestamp_ltz: ServerColumn::TimestampLtz.default_column_type(),
            char1: ServerColumn::Char1.default_column_type(),
            char: ServerColumn::Char.default_column_type(),
            varchar: ServerColumn::Varchar.default_column_type(),
            long: ServerColumn::Long.default_column_type(),
            clob: ServerColumn::Clob.default_column_type(),
            blob: ServerColumn::Blob.default_column_type(),
            raw: ServerColumn::Raw.default_column_type(),
            long_raw: ServerColumn::LongRaw.default_column_type(),
            true_rune: Self::DEFAULT_TRUE_RUNE,
        }
    }
}

impl ResultSetConfig {
    pub const DEFAULT_TRUE_RUNE: char = '1';

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every mapping and the true rune to driver defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn column_type(&self, column: ServerColumn) -> ColumnType {
        *self.slot(column)
    }

    /// Set the client type used to define select columns of `column`'s kind.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidColumnType` if `column_type` is outside the
    /// kind's category; the mapping is left unchanged.
    pub fn set_column_type(
        &mut self,
        column: ServerColumn,
        column_type: ColumnType,
    ) -> Result<(), ConfigError> {
        column
            .category()
            .check(column.setting_name(), column_type)?;
        *self.slot_mut(column) = column_type;
        Ok(())
    }

    /// Rune that decodes a CHAR(1) column to `true`; any other rune is `false`.
    #[must_use]
    pub fn true_rune(&self) -> char {
        self.true_rune
    }

    pub fn set_true_rune(&mut self, rune: char) {
        self.true_rune = rune;
    }

    #[must_use]
    pub fn decode_char1(&self, value: char) -> bool {
        value == self.true_rune
    }

    fn slot(&self, column: ServerColumn) -> &ColumnType {
        match column {
            ServerColumn::NumberInt => &self.number_int,
            ServerColumn::NumberBigInt => &self.number_big_int,
            ServerColumn::NumberFloat => &self.number_float,
            ServerColumn::NumberBigFloat => &self.number_big_float,
            ServerColumn::BinaryDouble => &self.binary_double,
            ServerColumn::BinaryFloat => &self.binary_float,
            ServerColumn::Float => &self.float,
            ServerColumn::Date => &self.date,
            ServerColumn::Timestamp => &self.timestamp,
            ServerColumn::TimestampTz => &self.timestamp_tz,
            ServerColumn::TimestampLtz => &self.timestamp_ltz,
            ServerColumn::Char1 => &self.char1,
            ServerColumn::Char => &self.char,
            ServerColumn::Varchar => &self.varchar,
            ServerColumn::Long => &self.long,
            ServerColumn::Clob => &self.clob,
            ServerColumn::Blob => &self.blob,
            ServerColumn::Raw => &self.raw,
            ServerColumn::LongRaw => &self.long_raw,
        }
    }

    fn slot_mut(&mut self, column: ServerColumn) -> &mut ColumnType {
        match column {
            ServerColumn::NumberInt => &mut self.number_int,
            ServerColumn::NumberBigInt => &mut self.number_big_int,
            ServerColumn::NumberFloat => &mut self.number_float,
            ServerColumn::NumberBigFloat => &mut self.number_big_float,
            ServerColumn::BinaryDouble => &mut self.binary_double,
            ServerColumn::BinaryFloat => &mut self.binary_float,
            ServerColumn::Float => &mut self.float,
            ServerColumn::Date => &mut self.date,
            ServerColumn::Timestamp => &mut self.timestamp,
            ServerColumn::TimestampTz => &mut self.timestamp_tz,
            ServerColumn::TimestampLtz => &mut self.timestamp_ltz,
            ServerColumn::Char1 => &mut self.char1,
            ServerColumn::Char => &mut self.char,
            ServerColumn::Varchar => &mut self.varchar,
            ServerColumn::Long => &mut self.long,
            ServerColumn::Clob => &mut self.clob,
            ServerColumn::Blob => &mut self.blob,
            ServerColumn::Raw => &mut self.raw,
            ServerColumn::LongRaw => &mut self.long_raw,
        }
    }
}

/// Partial result-set settings, as read from a configuration file.
///
/// Absent fields keep their current value when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultSetOverrides {
    pub number_int: Option<ColumnType>,
    pub number_big_int: Option<ColumnType>,
    pub number_float: Option<ColumnType>,
    pub number_big_float: Option<ColumnType>,
    pub binary_double: Option<ColumnType>,
    pub binary_float: Option<ColumnType>,
    pub float: Option<ColumnType>,
    pub date: Option<ColumnType>,
    pub timestamp: Option<ColumnType>,
    pub timestamp_tz: Option<ColumnType>,
    pub timestamp_ltz: Option<ColumnType>,
    pub char1: Option<ColumnType>,
    pub char: Option<ColumnType>,
    pub varchar: Option<ColumnType>,
    pub long: Option<ColumnType>,
    pub clob: Option<ColumnType>,
    pub blob: Option<ColumnType>,
    pub raw: Option<ColumnType>,
    pub long_raw: Option<ColumnType>,
    pub true_rune: Option<char>,
}

impl ResultSetOverrides {
    fn requested(&self, column: ServerColumn) -> Option<ColumnType> {
        match column {
            ServerColumn::NumberInt => self.number_int,
            ServerColumn::NumberBigInt => self.number_big_int,
            ServerColumn::NumberFloat => self.number_float,
            ServerColumn::NumberBigFloat => self.number_big_float,
            ServerColumn::BinaryDouble => self.binary_double,
            ServerColumn::BinaryFloat => self.binary_float,
            ServerColumn::Float => self.float,
            ServerColumn::Date => self.date,
            ServerColumn::Timestamp => self.timestamp,
            ServerColumn::TimestampTz => self.timestamp_tz,
            ServerColumn::TimestampLtz => self.timestamp_ltz,
            ServerColumn::Char1 => self.char1,
            ServerColumn::Char => self.char,
            ServerColumn::Varchar => self.varchar,
            ServerColumn::Long => self.long,
            ServerColumn::Clob => self.clob,
            ServerColumn::Blob => self.blob,
            ServerColumn::Raw => self.raw,
            ServerColumn::LongRaw => self.long_raw,
        }
    }

    /// Record `column_type` for `column`; validated when applied.
    pub fn set(&mut self, column: ServerColumn, column_type: ColumnType) {
        let slot = match column {
            ServerColumn::NumberInt => &mut self.number_int,
            ServerColumn::NumberBigInt => &mut self.number_big_int,
            ServerColumn::NumberFloat => &mut self.number_float,
            ServerColumn::NumberBigFloat => &mut self.number_big_float,
            ServerColumn::BinaryDouble => &mut self.binary_double,
            ServerColumn::BinaryFloat => &mut self.binary_float,
            ServerColumn::Float => &mut self.float,
            ServerColumn::Date => &mut self.date,
            ServerColumn::Timestamp => &mut self.timestamp,
            ServerColumn::TimestampTz => &mut self.timestamp_tz,
            ServerColumn::TimestampLtz => &mut self.timestamp_ltz,
            ServerColumn::Char1 => &mut self.char1,
            ServerColumn::Char => &mut self.char,
            ServerColumn::Varchar => &mut self.varchar,
            ServerColumn::Long => &mut self.long,
            ServerColumn::Clob => &mut self.clob,
            ServerColumn::Blob => &mut self.blob,
            ServerColumn::Raw => &mut self.raw,
            ServerColumn::LongRaw => &mut self.long_raw,
        };
        *slot = Some(column_type);
    }

    /// Apply every present field to `config`.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a setter; `config` is left
    /// unchanged in that case.
    pub fn apply_to(&self, config: &mut ResultSetConfig) -> Result<(), ConfigError> {
        let mut scratch = config.clone();
        for column in ServerColumn::ALL {
            if let Some(column_type) = self.requested(column) {
                scratch.set_column_type(column, column_type)?;
            }
        }
        if let Some(rune) = self.true_rune {
            scratch.set_true_rune(rune);
        }
        *config = scratch;
        Ok(())
    }
}

impl TryFrom<ResultSetOverrides> for ResultSetConfig {
    type Error = ConfigError;

    fn try_from(overrides: ResultSetOverrides) -> Result<Self, Self::Error> {
        let mut config = ResultSetConfig::default();
        overrides.apply_to(&mut config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_accepted_by_their_own_category() {
        for column in ServerColumn::ALL {
            assert!(
                column.category().accepts(column.default_column_type()),
                "{} default rejected",
                column.setting_name()
            );
        }
    }

    #[test]
    fn rejected_mapping_leaves_slot_unchanged() {
        let mut cfg = ResultSetConfig::new();
        let err = cfg
            .set_column_type(ServerColumn::Timestamp, ColumnType::I64)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColumnType {
                setting: "timestamp",
                column_type: ColumnType::I64,
                ..
            }
        ));
        assert_eq!(cfg.column_type(ServerColumn::Timestamp), ColumnType::Time);
    }

    #[test]
    fn overrides_are_all_or_nothing() {
        let mut cfg = ResultSetConfig::new();
        let overrides = ResultSetOverrides {
            blob: Some(ColumnType::U8),
            varchar: Some(ColumnType::Bool),
            ..ResultSetOverrides::default()
        };
        assert!(overrides.apply_to(&mut cfg).is_err());
        assert_eq!(cfg, ResultSetConfig::default());
    }
}
