//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Size of the general-purpose register file.
//! 2. **Instruction Constants:** Instruction width and field layout.
//! 3. **Memory Constants:** Default and maximum data memory sizing and access widths.

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Size of a 32-bit instruction in bytes; the PC advances by this much per cycle.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of bits in an instruction word.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Default size of the byte-addressable data memory (4 KiB).
pub const DEFAULT_DATA_MEMORY_SIZE: usize = 4096;

/// Largest data memory a 32-bit effective address can reach (4 GiB).
pub const MAX_DATA_MEMORY_SIZE: u64 = 1 << 32;

/// Width of a byte access in bytes.
pub const BYTE_WIDTH: usize = 1;

/// Width of a word access in bytes.
pub const WORD_WIDTH: usize = 4;

/// Mask applied to the second ALU operand for shift amounts (5 bits: 0-31).
pub const SHAMT_MASK: u32 = 0x1F;
