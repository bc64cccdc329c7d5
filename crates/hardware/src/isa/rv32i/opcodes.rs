//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) of the supported subset.

/// Load instructions (LB, LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ORI, SRAI).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SB, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, XOR).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Conditional Branch (BEQ).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;
