//! Instruction Decode (ID) Phase.
//!
//! Hands the fetched word to the control unit, which reads the source
//! registers and produces the operands and the immutable control-signal record.

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::units::control::{ControlUnit, DecodedInstruction};

/// Executes the instruction decode phase.
///
/// # Arguments
///
/// * `cpu` - Reference to the CPU state (registers and PC are read, not written)
/// * `inst` - The fetched instruction word
///
/// # Errors
///
/// Returns [`Trap::UnsupportedOpcode`] for opcodes outside the supported subset.
pub fn decode_stage(cpu: &Cpu, inst: u32) -> Result<DecodedInstruction, Trap> {
    ControlUnit::decode(inst, &cpu.regs, cpu.pc)
}
