//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, data memory size).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Use `Config::default()` for the reference machine; every JSON field is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::MAX_DATA_MEMORY_SIZE;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_DATA_MEMORY_SIZE;

    /// Program counter at reset.
    pub const START_PC: u32 = 0;

    /// Data memory size in bytes (4 KiB).
    pub const DATA_SIZE: usize = DEFAULT_DATA_MEMORY_SIZE;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rv32sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "data_size": 65536 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.data_size, 65536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the document is malformed and
    /// [`SimError::InvalidConfig`] when a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot describe a machine.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] when `memory.data_size` exceeds
    /// the 4 GiB reachable by a 32-bit address.
    pub fn validate(&self) -> Result<(), SimError> {
        let size = self.memory.data_size;
        if u64::try_from(size).is_ok_and(|size| size <= MAX_DATA_MEMORY_SIZE) {
            Ok(())
        } else {
            Err(SimError::InvalidConfig {
                field: "memory.data_size",
                reason: format!(
                    "{size} bytes exceeds the {MAX_DATA_MEMORY_SIZE}-byte address space"
                ),
            })
        }
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFile`] when the file cannot be read and
    /// [`SimError::Config`] or [`SimError::InvalidConfig`] when its contents
    /// are malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::InvalidFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every retired instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Data memory size in bytes
    #[serde(default = "MemoryConfig::default_data_size")]
    pub data_size: usize,
}

impl MemoryConfig {
    /// Returns the default data memory size in bytes.
    const fn default_data_size() -> usize {
        defaults::DATA_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_size: defaults::DATA_SIZE,
        }
    }
}
