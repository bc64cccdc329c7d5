//! RISC-V architecture-specific components.
//!
//! The only architectural state besides the program counter and data memory
//! is the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;
