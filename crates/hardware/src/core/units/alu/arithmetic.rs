//! ALU arithmetic operations.
//!
//! Two's-complement addition and subtraction; both wrap modulo 2^32.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
