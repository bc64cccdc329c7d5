//! Single-cycle RV32 subset simulator library.
//!
//! This crate implements an instruction-level simulator for a small 32-bit RISC-V subset:
//! 1. **ISA:** Field extraction, immediate sign-extension and disassembly for the R/I/S/B/U/J formats.
//! 2. **Core:** Register file, data memory, control unit, ALU control generator and ALU.
//! 3. **Cycle:** Fetch, decode, execute, memory, write-back and clock-tick phases, one instruction per cycle.
//! 4. **Simulation:** Hex program loader, run loop, configuration and statistics collection.

/// Common types and constants (error taxonomy, sizes).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (architectural state, control unit, ALU, cycle phases).
pub mod core;
/// Instruction set (field extraction, immediates, opcodes, disassembly).
pub mod isa;
/// Program loader and run loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Processor state; owns registers, data memory, PC and the instruction sequence.
pub use crate::core::Cpu;
/// Top-level driver; owns the CPU and runs it to completion.
pub use crate::sim::simulator::Simulator;
