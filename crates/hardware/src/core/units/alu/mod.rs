//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute phase, together with
//! the ALU control generator that selects its operation.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, Xor
//! - [`shifts`]:     Sra
//! - [`control`]:    operation-class to [`AluOp`] mapping

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// ALU control generator.
pub mod control;

/// Bitwise logical operations (or, xor).
pub mod logic;

/// Shift operations (sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// A pure function of its operands and selector. [`AluOp`] is a closed
/// enumeration, so every selector has a defined result.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::Alu;
    /// use rv32sim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF_FFFF);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::Xor => logic::execute(op, a, b),
            AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
