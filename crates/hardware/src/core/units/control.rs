//! Control Unit (Instruction Decoder).
//!
//! Given a raw instruction word, read-only access to the register file and the
//! current PC, the control unit produces the two ALU operands, the destination
//! register index and the [`ControlSignals`] record for the rest of the cycle.
//! Dispatch is an exhaustive match over [`Opcode`]; opcodes outside the subset
//! are rejected by [`decode`] before any signal is generated.

use crate::common::error::Trap;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::signals::{AluOpClass, ControlSignals, OpBSrc};
use crate::isa::decode::{Decoded, Opcode, decode};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::funct3;

/// Output of the control unit for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Field-level decode of the instruction word.
    pub decoded: Decoded,
    /// First ALU operand.
    pub operand1: u32,
    /// Second ALU operand.
    pub operand2: u32,
    /// Destination register index (bits 11:7).
    pub rd: usize,
    /// Control signals for the remaining phases.
    pub signals: ControlSignals,
}

/// Stateless instruction decoder.
#[derive(Debug)]
pub struct ControlUnit;

impl ControlUnit {
    /// Decodes `inst` fetched from `pc`, reading source registers from `regs`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedOpcode`] when the opcode is outside the supported subset.
    pub fn decode(inst: u32, regs: &Gpr, pc: u32) -> Result<DecodedInstruction, Trap> {
        let d = decode(inst)?;
        let rs1_val = regs.read(d.rs1);
        let rs2_val = regs.read(d.rs2);

        let mut signals = ControlSignals {
            funct3: d.funct3,
            ..ControlSignals::default()
        };

        let (operand1, operand2) = match d.opcode {
            Opcode::OpImm => {
                signals.reg_write = true;
                signals.b_src = OpBSrc::Imm;
                signals.alu_class = AluOpClass::Register;
                if d.funct3 == funct3::SRL_SRA {
                    // funct7 distinguishes SRAI from SRLI and is kept for the ALU control.
                    signals.funct7 = d.funct7;
                    (rs1_val, inst.shamt())
                } else {
                    // The upper bits belong to the immediate; there is no funct7 here.
                    (rs1_val, d.imm as u32)
                }
            }
            Opcode::OpReg => {
                signals.reg_write = true;
                signals.b_src = OpBSrc::Reg2;
                signals.alu_class = AluOpClass::Register;
                signals.funct7 = d.funct7;
                (rs1_val, rs2_val)
            }
            Opcode::Load => {
                signals.mem_read = true;
                signals.reg_write = true;
                signals.mem_to_reg = true;
                signals.b_src = OpBSrc::Imm;
                signals.alu_class = AluOpClass::MemoryAddress;
                (rs1_val, d.imm as u32)
            }
            Opcode::Store => {
                signals.mem_write = true;
                signals.b_src = OpBSrc::Imm;
                signals.alu_class = AluOpClass::MemoryAddress;
                signals.rs2_val = rs2_val;
                (rs1_val, d.imm as u32)
            }
            Opcode::Lui => {
                signals.reg_write = true;
                signals.b_src = OpBSrc::Imm;
                signals.alu_class = AluOpClass::MemoryAddress;
                (0, d.imm as u32)
            }
            Opcode::Branch => {
                signals.branch = true;
                signals.b_src = OpBSrc::Reg2;
                signals.alu_class = AluOpClass::BranchCompare;
                signals.branch_imm = d.imm;
                (rs1_val, rs2_val)
            }
            Opcode::Jal => {
                signals.jump = true;
                signals.reg_write = true;
                signals.alu_class = AluOpClass::MemoryAddress;
                signals.branch_imm = d.imm;
                (pc, d.imm as u32)
            }
        };

        Ok(DecodedInstruction {
            decoded: d,
            operand1,
            operand2,
            rd: d.rd,
            signals,
        })
    }
}
