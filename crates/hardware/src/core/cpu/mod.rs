//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owner of the
//! simulated machine state. It holds:
//! 1. **State Management:** Register file, program counter and the pending Next-PC.
//! 2. **Program Storage:** The instruction sequence, immutable once loaded.
//! 3. **Data Memory:** Byte-addressable little-endian store.
//! 4. **Observability:** Instruction tracing flag and performance statistics.

/// Cycle orchestration (fetch through clock tick).
pub mod execution;

/// Data memory and load/store helpers.
pub mod memory;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::Trap;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::stats::SimStats;

pub use self::memory::DataMemory;

/// Main CPU structure containing all processor state.
///
/// The decoder, ALU control generator and ALU are stateless; every cycle
/// phase receives the CPU by reference and applies its results here.
#[derive(Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter (byte address into the instruction sequence).
    pub pc: u32,
    /// PC computed by the execute phase, committed by the clock tick.
    pub next_pc: u32,
    /// Data memory.
    pub memory: DataMemory,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
    program: Vec<u32>,
}

impl Cpu {
    /// Creates a CPU holding `program`, with zeroed registers and data memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory size, start PC and tracing settings.
    /// * `program` - Instruction words; word `i` lives at byte address `4 * i`.
    pub fn new(config: &Config, program: Vec<u32>) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.general.start_pc,
            next_pc: config.general.start_pc,
            memory: DataMemory::new(config.memory.data_size),
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            program,
        }
    }

    /// Returns the loaded instruction sequence.
    pub fn program(&self) -> &[u32] {
        &self.program
    }

    /// Returns the first byte address past the program (`4 * instruction_count`).
    ///
    /// Saturates at `u32::MAX` for programs larger than the address space.
    pub fn max_address(&self) -> u32 {
        u32::try_from(self.program.len())
            .ok()
            .and_then(|n| n.checked_mul(INSTRUCTION_SIZE))
            .unwrap_or(u32::MAX)
    }

    /// Returns true once the PC has run off the end of the program.
    pub fn is_halted(&self) -> bool {
        self.pc >= self.max_address()
    }

    /// Fetches the instruction word at byte address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InstructionAddressMisaligned`] when `addr` is not a
    /// multiple of four, and [`Trap::InstructionAccessFault`] when it lies
    /// outside the loaded program.
    pub fn fetch_instruction(&self, addr: u32) -> Result<u32, Trap> {
        if addr % INSTRUCTION_SIZE != 0 {
            return Err(Trap::InstructionAddressMisaligned(addr));
        }
        self.program
            .get((addr / INSTRUCTION_SIZE) as usize)
            .copied()
            .ok_or(Trap::InstructionAccessFault(addr))
    }

    /// Reads a general-purpose register.
    pub const fn read_register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Writes a general-purpose register; writes to `x0` are discarded.
    pub const fn write_register(&mut self, idx: usize, val: u32) {
        self.regs.write(idx, val);
    }

    /// Prints the PC and all registers to stdout.
    pub fn dump_state(&self) {
        println!(
            "pc={:#010x} next_pc={:#010x} max_address={:#010x}",
            self.pc,
            self.next_pc,
            self.max_address()
        );
        self.regs.dump();
    }
}
