//! ALU Control Generator.
//!
//! Derives the concrete [`AluOp`] from the coarse [`AluOpClass`] emitted by the
//! control unit and the instruction's function fields:
//! - memory-address class always adds;
//! - branch-compare class always subtracts (zero means equal);
//! - register class dispatches on funct3, with funct7 bit 5 turning `ADD` into `SUB`.

use crate::core::pipeline::signals::{AluOp, AluOpClass};
use crate::isa::rv32i::{funct3, funct7};

/// Selects the ALU operation for an operation class and function fields.
///
/// # Arguments
///
/// * `class`  - Coarse class from the control unit.
/// * `funct3` - The instruction's funct3 field.
/// * `funct7` - The instruction's funct7 field (zero for formats without one).
///
/// # Returns
///
/// The ALU operation. Unlisted funct3 values of the register class select `Add`.
pub const fn generate(class: AluOpClass, f3: u32, f7: u32) -> AluOp {
    match class {
        AluOpClass::MemoryAddress => AluOp::Add,
        AluOpClass::BranchCompare => AluOp::Sub,
        AluOpClass::Register => match f3 {
            funct3::ADD_SUB if f7 & funct7::ALT_BIT != 0 => AluOp::Sub,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA => AluOp::Sra,
            funct3::OR => AluOp::Or,
            _ => AluOp::Add,
        },
    }
}
