//! Simulation utilities and program loading.
//!
//! Provides the hex program loader and the top-level driver that owns the
//! CPU and runs it until the program counter leaves the program.

/// Hex-byte-per-line program parser and file loader.
pub mod loader;

/// Run loop, halt test and result reporting.
pub mod simulator;
