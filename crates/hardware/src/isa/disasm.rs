//! Instruction Disassembler for the supported RV32 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::disasm::disassemble;
//! let text = disassemble(0x00F56513); // ORI x10, x10, 15
//! assert_eq!(text, "ori a0, a0, 15");
//! ```

use crate::isa::abi::REG_NAMES;
use crate::isa::decode::{Decoded, Opcode, decode};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7};

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let Ok(d) = decode(inst) else {
        return "unknown".to_string();
    };

    match d.opcode {
        Opcode::OpReg => disasm_op_reg(&d),
        Opcode::OpImm => disasm_op_imm(&d),
        Opcode::Load => {
            let mn = match d.funct3 {
                f3::LB => "lb",
                f3::LW => "lw",
                _ => "l??",
            };
            format!("{mn} {}, {}({})", xreg(d.rd), d.imm, xreg(d.rs1))
        }
        Opcode::Store => {
            let mn = match d.funct3 {
                f3::SB => "sb",
                f3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} {}, {}({})", xreg(d.rs2), d.imm, xreg(d.rs1))
        }
        Opcode::Branch => {
            let mn = if d.funct3 == f3::BEQ { "beq" } else { "b??" };
            format!("{mn} {}, {}, {}", xreg(d.rs1), xreg(d.rs2), d.imm)
        }
        Opcode::Lui => format!("lui {}, {:#x}", xreg(d.rd), (d.imm as u32) >> 12),
        Opcode::Jal => format!("jal {}, {}", xreg(d.rd), d.imm),
    }
}

/// Disassembles register-register (R-type) integer instructions.
fn disasm_op_reg(d: &Decoded) -> String {
    let alt = d.funct7 & f7::ALT_BIT != 0;
    let mn = match d.funct3 {
        f3::ADD_SUB if alt => "sub",
        f3::ADD_SUB => "add",
        0b001 => "sll",
        0b010 => "slt",
        0b011 => "sltu",
        f3::XOR => "xor",
        f3::SRL_SRA if alt => "sra",
        f3::SRL_SRA => "srl",
        f3::OR => "or",
        _ => "and",
    };
    format!("{mn} {}, {}, {}", xreg(d.rd), xreg(d.rs1), xreg(d.rs2))
}

/// Disassembles immediate arithmetic (I-type) instructions.
fn disasm_op_imm(d: &Decoded) -> String {
    if d.funct3 == f3::SRL_SRA {
        let mn = if d.funct7 & f7::ALT_BIT != 0 {
            "srai"
        } else {
            "srli"
        };
        return format!("{mn} {}, {}, {}", xreg(d.rd), xreg(d.rs1), d.raw.shamt());
    }
    let mn = match d.funct3 {
        f3::ADD_SUB => "addi",
        0b001 => "slli",
        0b010 => "slti",
        0b011 => "sltiu",
        f3::XOR => "xori",
        f3::OR => "ori",
        _ => "andi",
    };
    format!("{mn} {}, {}, {}", xreg(d.rd), xreg(d.rs1), d.imm)
}
