//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines standard RISC-V ABI register names and their corresponding
//! register indices. Programs leave their results in `a0`/`a1`.

/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument/return value, a1).
pub const REG_A1: usize = 11;

/// ABI names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];
