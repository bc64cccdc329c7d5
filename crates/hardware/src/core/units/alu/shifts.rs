//! ALU shift operations.
//!
//! Implements shift-right arithmetic (SRA). The shift amount is masked to
//! 5 bits (0–31) and the first operand is reinterpreted as signed, so the
//! sign bit is replicated into the vacated high bits.

use crate::common::constants::SHAMT_MASK;
use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Sra => ((a as i32) >> (b & SHAMT_MASK)) as u32,
        _ => 0,
    }
}
