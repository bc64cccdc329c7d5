//! ALU logical operations.
//!
//! Implements bitwise OR and XOR.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical operation.
///
/// # Returns
///
/// The bitwise result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        _ => 0,
    }
}
