//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register-file, instruction and memory sizing.
//! 2. **Error Handling:** Per-cycle trap kinds and run-level simulator errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use error::{SimError, Trap};
