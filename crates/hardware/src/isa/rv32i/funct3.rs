//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., LB vs LW, ADD vs XOR).

/// Load Byte.
pub const LB: u32 = 0b000;
/// Load Word.
pub const LW: u32 = 0b010;

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;

/// Add / Subtract.
pub const ADD_SUB: u32 = 0b000;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift Right Logical / Arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
