//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts opcode, register fields, function codes
//! and sign-extended immediates for every supported format.
//!
//! # Coverage Matrix
//!
//! - R-type:  OP_REG
//! - I-type:  OP_IMM, OP_LOAD
//! - S-type:  OP_STORE
//! - B-type:  OP_BRANCH
//! - U-type:  OP_LUI
//! - J-type:  OP_JAL

use proptest::prelude::*;
use rv32sim_core::common::Trap;
use rv32sim_core::isa::decode::{
    Format, Opcode, decode, decode_b_type_imm, decode_i_type_imm, decode_j_type_imm,
    decode_s_type_imm, decode_u_type_imm, sign_extend,
};
use rv32sim_core::isa::instruction::InstructionBits;
use rv32sim_core::isa::rv32i::funct7;

use crate::common::builder::instruction::inst;

// ──────────────────────────────────────────────────────────
// Fixed encodings
// ──────────────────────────────────────────────────────────

#[test]
fn test_r_type_fields() {
    let raw = inst().sub(3, 1, 2).build();
    let d = decode(raw).unwrap();
    assert_eq!(d.opcode, Opcode::OpReg);
    assert_eq!(d.opcode.format(), Format::R);
    assert_eq!((d.rd, d.rs1, d.rs2), (3, 1, 2));
    assert_eq!(d.funct3, 0);
    assert_eq!(d.funct7, funct7::SUB);
    assert_eq!(d.imm, 0);
    assert_eq!(raw.funct7(), funct7::SUB);
}

#[test]
fn test_i_type_all_ones_is_minus_one() {
    // ori a0, a0, 0xFFF
    let raw = inst().ori(10, 10, 0xFFF).build();
    assert_eq!(decode_i_type_imm(raw), -1);
    assert_eq!(decode(raw).unwrap().imm, -1);
}

#[test]
fn test_i_type_boundaries() {
    assert_eq!(decode_i_type_imm(inst().addi(1, 1, 2047).build()), 2047);
    assert_eq!(decode_i_type_imm(inst().addi(1, 1, -2048).build()), -2048);
}

#[test]
fn test_srai_shamt_and_funct7() {
    let raw = inst().srai(6, 5, 4).build();
    assert_eq!(raw.shamt(), 4);
    assert_eq!(raw.funct7(), funct7::SRA);
    assert_eq!(raw.funct3(), 0b101);
}

#[test]
fn test_s_type_split_immediate() {
    let d = decode(inst().sw(2, 8, -1).build()).unwrap();
    assert_eq!(d.opcode, Opcode::Store);
    assert_eq!(d.imm, -1);
    assert_eq!((d.rs1, d.rs2), (2, 8));
}

#[test]
fn test_b_type_extremes() {
    assert_eq!(decode_b_type_imm(inst().beq(0, 0, 4094).build()), 4094);
    assert_eq!(decode_b_type_imm(inst().beq(0, 0, -4096).build()), -4096);
}

#[test]
fn test_u_type_clears_low_bits() {
    let raw = inst().lui(5, 0x12345).build() | 0xF80;
    assert_eq!(decode_u_type_imm(raw), 0x1234_5000);
}

#[test]
fn test_j_type_extremes() {
    assert_eq!(decode_j_type_imm(inst().jal(0, 20).build()), 20);
    assert_eq!(decode_j_type_imm(inst().jal(0, 0xF_FFFE).build()), 0xF_FFFE);
    assert_eq!(decode_j_type_imm(inst().jal(0, -0x10_0000).build()), -0x10_0000);
}

#[test]
fn test_sign_extend_widths() {
    assert_eq!(sign_extend(0xFFF, 12), -1);
    assert_eq!(sign_extend(0x7FF, 12), 2047);
    assert_eq!(sign_extend(0x1000, 13), -4096);
    assert_eq!(sign_extend(0x10_0000, 21), -0x10_0000);
    assert_eq!(sign_extend(0xFFFF_FFFF, 32), -1);
    assert_eq!(sign_extend(0x1, 1), -1);
}

#[test]
fn test_sign_extend_degenerate_widths() {
    assert_eq!(sign_extend(0xFFFF_FFFF, 0), 0);
    assert_eq!(sign_extend(0x8000_0000, 33), i32::MIN);
    assert_eq!(sign_extend(0x7FFF_FFFF, u32::MAX), i32::MAX);
}

#[test]
fn test_unsupported_opcodes() {
    for raw in [0x0000_0000, 0x0000_0017, 0x0000_0067, 0x0000_0073, 0xFFFF_FFFF] {
        assert!(matches!(
            decode(raw),
            Err(Trap::UnsupportedOpcode { inst: got, .. }) if got == raw
        ));
    }
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_sign_extend_matches_shift_pair(val in any::<u32>(), bits in 1u32..=32) {
        let shift = 32 - bits;
        let reference = ((val << shift) as i32) >> shift;
        prop_assert_eq!(sign_extend(val, bits), reference);
    }

    #[test]
    fn prop_sign_extend_ignores_high_bits(val in 0u32..0x1000, junk in any::<u32>()) {
        prop_assert_eq!(sign_extend(val | (junk << 12), 12), sign_extend(val, 12));
    }

    #[test]
    fn prop_i_type_imm(imm in -2048i32..2048, rd in 0u32..32, rs1 in 0u32..32) {
        prop_assert_eq!(decode_i_type_imm(inst().lw(rd, rs1, imm).build()), imm);
    }

    #[test]
    fn prop_s_type_imm(imm in -2048i32..2048, rs1 in 0u32..32, rs2 in 0u32..32) {
        prop_assert_eq!(decode_s_type_imm(inst().sb(rs1, rs2, imm).build()), imm);
    }

    #[test]
    fn prop_b_type_imm(half in -2048i32..2048) {
        let imm = half * 2;
        prop_assert_eq!(decode_b_type_imm(inst().beq(31, 31, imm).build()), imm);
    }

    #[test]
    fn prop_j_type_imm(half in -0x8_0000i32..0x8_0000, rd in 0u32..32) {
        let imm = half * 2;
        prop_assert_eq!(decode_j_type_imm(inst().jal(rd, imm).build()), imm);
    }

    #[test]
    fn prop_rd_is_bits_11_7(raw in any::<u32>()) {
        prop_assert_eq!(raw.rd(), ((raw >> 7) & 0x1F) as usize);
    }
}
