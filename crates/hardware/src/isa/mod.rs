//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! supported RV32 integer subset.
//!
//! # Supported instructions
//!
//! * R-type: `ADD`, `SUB`, `XOR` (other funct3 values follow the ALU control mapping).
//! * I-type: `ORI`, `SRAI`, `LB`, `LW`.
//! * S-type: `SB`, `SW`.
//! * B-type: `BEQ`.
//! * U-type: `LUI`.
//! * J-type: `JAL`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all supported instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding bit extraction utilities.
pub mod instruction;

/// Base integer instruction subset (32-bit).
pub mod rv32i;
