//! Trap and Simulator Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** Faults raised by a single cycle (decode, fetch, memory).
//! 2. **Run-level Errors:** Program loading, file access, configuration, and traps tagged with their PC.
//! 3. **Error Handling:** Integration with standard Rust error traits through `thiserror`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults raised while executing a single cycle.
///
/// A trap aborts the cycle that raised it; no later phase of that cycle runs
/// and the program counter is not advanced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The opcode field names no instruction in the supported subset.
    #[error("UnsupportedOpcode(opcode={opcode:#04x}, inst={inst:#010x})")]
    UnsupportedOpcode {
        /// The 7-bit opcode field.
        opcode: u32,
        /// The full instruction encoding.
        inst: u32,
    },

    /// A load or store touched bytes outside the data memory.
    ///
    /// Raised when any byte in `addr..addr + width` lies at or beyond `size`.
    #[error("MemoryOutOfBounds(addr={addr:#x}, width={width}, size={size})")]
    MemoryOutOfBounds {
        /// Effective address of the access.
        addr: u32,
        /// Access width in bytes (1 or 4).
        width: usize,
        /// Size of the data memory in bytes.
        size: usize,
    },

    /// Instruction fetch past the end of the loaded program.
    ///
    /// The associated value is the program counter.
    #[error("InstructionAccessFault({0:#x})")]
    InstructionAccessFault(u32),

    /// Instruction fetch from a PC that is not a multiple of four.
    ///
    /// The associated value is the program counter.
    #[error("InstructionAddressMisaligned({0:#x})")]
    InstructionAddressMisaligned(u32),
}

/// Errors surfaced to users of the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// A cycle raised a trap; the run stops at the failing instruction.
    #[error("trap at pc {pc:#010x}: {trap}")]
    Trap {
        /// PC of the instruction that raised the trap.
        pc: u32,
        /// The fault kind.
        trap: Trap,
    },

    /// The instruction source is malformed; reported before any cycle runs.
    #[error("program load error at line {line}: {reason}")]
    ProgramLoad {
        /// 1-based line number where the problem was detected.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// The program file is missing or unreadable.
    #[error("could not read '{}': {source}", path.display())]
    InvalidFile {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but a value is out of range.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfig {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Description of the problem.
        reason: String,
    },
}

impl SimError {
    /// Returns the trap and its PC if this error came from a failing cycle.
    pub const fn trap(&self) -> Option<(u32, &Trap)> {
        match self {
            Self::Trap { pc, trap } => Some((*pc, trap)),
            _ => None,
        }
    }
}
