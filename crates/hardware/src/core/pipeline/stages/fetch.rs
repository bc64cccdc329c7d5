//! Instruction Fetch (IF) Phase.
//!
//! Reads the instruction word at the current program counter from the
//! instruction sequence.

use crate::common::error::Trap;
use crate::core::Cpu;

/// Executes the instruction fetch phase.
///
/// # Arguments
///
/// * `cpu` - Reference to the CPU state
///
/// # Errors
///
/// Returns [`Trap::InstructionAccessFault`] when `pc >= max_address` and
/// [`Trap::InstructionAddressMisaligned`] when the PC is not word aligned.
pub fn fetch_stage(cpu: &Cpu) -> Result<u32, Trap> {
    cpu.fetch_instruction(cpu.pc)
}
