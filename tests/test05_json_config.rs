use std::io::Write;

use sql_stmt_config::prelude::*;

#[test]
fn partial_document_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = StatementConfig::from_json_str(
        r#"{
            "prefetch_row_count": 500,
            "prefetch_memory_size": 0,
            "long_raw_buffer_size": 0,
            "byte_slice": "u8",
            "auto_commit": false,
            "false_rune": "N",
            "true_rune": "Y",
            "result_set": { "char1": "str", "true_rune": "T" }
        }"#,
    )?;
    assert_eq!(cfg.prefetch_limit(), PrefetchLimit::Rows(500));
    assert_eq!(cfg.long_raw_buffer_size(), 0);
    assert_eq!(cfg.long_buffer_size(), StatementConfig::DEFAULT_LONG_BUFFER_SIZE);
    assert_eq!(cfg.byte_slice(), ColumnType::U8);
    assert!(!cfg.commits_after_execute(false));
    assert_eq!(cfg.encode_bool(false), 'N');
    assert_eq!(cfg.result_set().column_type(ServerColumn::Char1), ColumnType::Str);
    assert!(cfg.result_set().decode_char1('T'));
    Ok(())
}

#[test]
fn invalid_values_are_rejected_while_parsing() {
    for json in [
        r#"{ "long_buffer_size": 0 }"#,
        r#"{ "lob_buffer_size": 2147483643 }"#,
        r#"{ "string_ptr_buffer_size": 0 }"#,
        r#"{ "byte_slice": "str" }"#,
        r#"{ "result_set": { "blob": "time" } }"#,
    ] {
        let err = StatementConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{json}: {err}");
    }
}

#[test]
fn parse_error_carries_setter_message() {
    let err = StatementConfig::from_json_str(r#"{ "long_buffer_size": 0 }"#).unwrap_err();
    assert!(
        err.to_string()
            .contains("long_buffer_size must be greater than zero"),
        "{err}"
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = StatementConfig::from_json_str(r#"{ "long_buffer": 10 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn serialized_config_reloads_identically() -> Result<(), ConfigError> {
    let cfg = StatementConfig::builder()
        .prefetch_row_count(32)
        .lob_buffer_size(-1)
        .column_type(ServerColumn::NumberBigInt, ColumnType::Str)
        .build()?;
    let json = cfg.to_json_string()?;
    assert_eq!(StatementConfig::from_json_str(&json)?, cfg);
    Ok(())
}

#[test]
fn loads_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"{{ "string_ptr_buffer_size": 32767 }}"#)?;
    let cfg = StatementConfig::from_json_file(file.path())?;
    assert_eq!(cfg.string_ptr_buffer_size(), 32_767);
    Ok(())
}

#[test]
fn missing_file_is_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let err = StatementConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    Ok(())
}
