//! # Configuration Tests

use std::io::Write;

use pretty_assertions::assert_eq;
use rv32sim_core::common::SimError;
use rv32sim_core::config::{Config, GeneralConfig, MemoryConfig};
use tempfile::NamedTempFile;

#[test]
fn test_defaults_describe_reference_machine() {
    let config = Config::default();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                start_pc: 0,
            },
            memory: MemoryConfig { data_size: 4096 },
        }
    );
}

#[test]
fn test_empty_json_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let config = Config::from_json(r#"{"general":{"trace_instructions":true}}"#).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.memory.data_size, 4096);
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = Config::from_json(r#"{"memory":{"data_size":"big"}}"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_data_size_beyond_address_space_is_rejected() {
    let err = Config::from_json(r#"{"memory":{"data_size":18446744073709551615}}"#).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidConfig {
            field: "memory.data_size",
            ..
        }
    ));

    let err = Config::from_json(r#"{"memory":{"data_size":4294967297}}"#).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig { .. }));
}

#[test]
fn test_data_size_at_address_space_limit_is_accepted() {
    let config = Config::from_json(r#"{"memory":{"data_size":4294967296}}"#).unwrap();
    assert_eq!(config.memory.data_size, 1 << 32);
}

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"memory":{"data_size":65536}}"#).unwrap();
    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.memory.data_size, 65536);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SimError::InvalidFile { .. }));
}
