//! Core processor implementation.
//!
//! This module contains the processor state, the per-cycle phases, the
//! execution units, and the architectural register file.

/// Architecture-specific components (general-purpose register file).
pub mod arch;

/// CPU state and cycle orchestration.
pub mod cpu;

/// Per-cycle control signals and the phase implementations.
pub mod pipeline;

/// Execution units (control unit, ALU control generator, ALU).
pub mod units;

pub use self::cpu::Cpu;
