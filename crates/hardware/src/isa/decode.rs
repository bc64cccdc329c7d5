//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RISC-V instruction encodings into
//! a structured `Decoded` format. It classifies the opcode into a closed set of
//! supported instructions, extracts register indices and function codes, and
//! reassembles and sign-extends the immediate of every instruction format
//! (R, I, S, B, U, J).
//!
//! Sign extension never relies on arithmetic right shifts of signed integers:
//! each field is masked to its width and then extended with [`sign_extend`].

use std::fmt;

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::Trap;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Total number of bits in I-Type immediate (12 bits).
const I_IMM_BITS: u32 = 12;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// The immediate is split across two non-contiguous fields.
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Bit shift for extracting B-Type immediate bit 11 (bit 7 of instruction).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// The immediate represents a signed offset in multiples of 2 (bit 0 is always zero).
const B_IMM_11_SHIFT: u32 = 7;

/// Bit mask for B-Type immediate bit 11.
const B_IMM_11_MASK: u32 = 1;

/// Bit shift for extracting B-Type immediate bits 4-1 (bits 8-11 of instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for extracting B-Type immediate bits 10-5 (bits 25-30 of instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for extracting B-Type immediate bit 12 (bit 31 of instruction).
const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask for B-Type immediate bit 12 (sign bit).
const B_IMM_12_MASK: u32 = 1;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Bit position of bit 12 in the reconstructed B-Type immediate.
const B_IMM_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed B-Type immediate.
const B_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-5 in the reconstructed B-Type immediate.
const B_IMM_10_5_POS: u32 = 5;

/// Bit position of bits 4-1 in the reconstructed B-Type immediate.
const B_IMM_4_1_POS: u32 = 1;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The low 12 bits of the result are zero; no sign extension is needed on a 32-bit machine.
const U_IMM_MASK: u32 = 0xFFFFF000;

/// Bit shift for extracting J-Type immediate bits 19-12 (bits 12-19 of instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// The immediate represents a signed offset in multiples of 2 (bit 0 is always zero).
const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Bit shift for extracting J-Type immediate bit 11 (bit 20 of instruction).
const J_IMM_11_SHIFT: u32 = 20;

/// Bit mask for J-Type immediate bit 11.
const J_IMM_11_MASK: u32 = 1;

/// Bit shift for extracting J-Type immediate bits 10-1 (bits 21-30 of instruction).
const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Bit shift for extracting J-Type immediate bit 20 (bit 31 of instruction).
const J_IMM_20_SHIFT: u32 = 31;

/// Bit mask for J-Type immediate bit 20 (sign bit).
const J_IMM_20_MASK: u32 = 1;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Bit position of bit 20 in the reconstructed J-Type immediate.
const J_IMM_20_POS: u32 = 20;

/// Bit position of bits 19-12 in the reconstructed J-Type immediate.
const J_IMM_19_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed J-Type immediate.
const J_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-1 in the reconstructed J-Type immediate.
const J_IMM_10_1_POS: u32 = 1;

/// Bit layout class of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Register-immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    B,
    /// Upper immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    J,
}

/// The closed set of major opcodes the simulator executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// `0x13`: ORI, SRAI (I-type).
    OpImm,
    /// `0x33`: ADD, SUB, XOR (R-type).
    OpReg,
    /// `0x03`: LB, LW (I-type).
    Load,
    /// `0x23`: SB, SW (S-type).
    Store,
    /// `0x37`: LUI (U-type).
    Lui,
    /// `0x63`: BEQ (B-type).
    Branch,
    /// `0x6F`: JAL (J-type).
    Jal,
}

impl Opcode {
    /// Classifies the opcode field of `inst`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedOpcode`] when the opcode is outside the supported subset.
    pub const fn from_inst(inst: u32) -> Result<Self, Trap> {
        let opcode = inst & crate::isa::instruction::OPCODE_MASK;
        match opcode {
            opcodes::OP_IMM => Ok(Self::OpImm),
            opcodes::OP_REG => Ok(Self::OpReg),
            opcodes::OP_LOAD => Ok(Self::Load),
            opcodes::OP_STORE => Ok(Self::Store),
            opcodes::OP_LUI => Ok(Self::Lui),
            opcodes::OP_BRANCH => Ok(Self::Branch),
            opcodes::OP_JAL => Ok(Self::Jal),
            _ => Err(Trap::UnsupportedOpcode { opcode, inst }),
        }
    }

    /// Returns the instruction format used by this opcode.
    pub const fn format(self) -> Format {
        match self {
            Self::OpReg => Format::R,
            Self::OpImm | Self::Load => Format::I,
            Self::Store => Format::S,
            Self::Branch => Format::B,
            Self::Lui => Format::U,
            Self::Jal => Format::J,
        }
    }

    /// Returns the raw 7-bit opcode value.
    pub const fn bits(self) -> u32 {
        match self {
            Self::OpImm => opcodes::OP_IMM,
            Self::OpReg => opcodes::OP_REG,
            Self::Load => opcodes::OP_LOAD,
            Self::Store => opcodes::OP_STORE,
            Self::Lui => opcodes::OP_LUI,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Jal => opcodes::OP_JAL,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#04x})", self, self.bits())
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// `imm` holds the format-specific immediate: zero for R-type, the
/// sign-extended 12-bit field for I/S-type, the even 13/21-bit displacement
/// for B/J-type and the upper immediate (low 12 bits clear) for U-type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Classified opcode.
    pub opcode: Opcode,
    /// Destination register index (bits 11:7).
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Format-specific immediate.
    pub imm: i32,
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// Returns [`Trap::UnsupportedOpcode`] for opcodes outside the supported subset.
pub fn decode(inst: u32) -> Result<Decoded, Trap> {
    let opcode = Opcode::from_inst(inst)?;

    let imm = match opcode.format() {
        Format::R => 0,
        Format::I => decode_i_type_imm(inst),
        Format::S => decode_s_type_imm(inst),
        Format::B => decode_b_type_imm(inst),
        Format::U => decode_u_type_imm(inst) as i32,
        Format::J => decode_j_type_imm(inst),
    };

    Ok(Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    })
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load and Immediate Arithmetic instructions.
pub const fn decode_i_type_imm(inst: u32) -> i32 {
    sign_extend(inst >> I_IMM_SHIFT, I_IMM_BITS)
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// Used for Store instructions.
pub const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Used for Conditional Branch instructions. The immediate represents an even offset.
pub const fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Used for LUI.
pub const fn decode_u_type_imm(inst: u32) -> u32 {
    inst & U_IMM_MASK
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL (Unconditional Jump).
pub const fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
///
/// The field is masked to `bits` width first, then its sign bit `s` is
/// propagated with `(v ^ s) - s`, which is exact two's-complement extension
/// for every width from 1 to 32.
///
/// # Arguments
///
/// * `val` - The value to extend; bits above `bits` are ignored.
/// * `bits` - The number of valid bits in `val`. A width of 0 yields 0 and
///   widths above 32 are treated as 32.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }
    if bits >= INSTRUCTION_WIDTH {
        return val as i32;
    }
    let mask = (1 << bits) - 1;
    let sign = 1 << (bits - 1);
    ((val & mask) ^ sign).wrapping_sub(sign) as i32
}
