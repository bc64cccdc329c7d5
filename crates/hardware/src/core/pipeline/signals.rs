//! Per-cycle control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Coarse ALU operation classes and concrete ALU selectors.
//! 2. **Operand Selection:** Whether the second ALU operand is an immediate or a register.
//! 3. **Memory Control:** Load/store enables and the store width.
//! 4. **Flow Control:** Branch and jump flags with their resolved displacement.
//!
//! A [`ControlSignals`] record is produced once by the control unit and read,
//! never modified, by the execute, memory and write-back phases.

use crate::isa::rv32i::funct3;

/// Concrete ALU operation selected by the ALU control generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Bitwise OR.
    Or,

    /// Two's-complement addition.
    #[default]
    Add,

    /// Two's-complement subtraction; a zero result signals equality.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Shift right arithmetic by `b & 0x1F`.
    Sra,
}

/// Coarse operation class emitted by the control unit.
///
/// The ALU control generator refines it into an [`AluOp`] using the
/// instruction's function fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOpClass {
    /// Address calculation for loads, stores and `LUI`; always `Add`.
    #[default]
    MemoryAddress,

    /// Equality comparison for branches; always `Sub`.
    BranchCompare,

    /// Register-register or register-immediate operation; dispatched on funct3/funct7.
    Register,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the instruction's immediate (or shift amount).
    #[default]
    Imm,

    /// Use `rs2` register value.
    Reg2,
}

/// Memory access width for store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,

    /// 32-bit word access.
    #[default]
    Word,
}

impl MemWidth {
    /// Returns the store width encoded by a store's funct3 field.
    ///
    /// `SB` stores a single byte; every other encoding stores a full word.
    pub const fn from_store_funct3(f3: u32) -> Self {
        if f3 == funct3::SB { Self::Byte } else { Self::Word }
    }
}

/// Control signals for one cycle.
///
/// Contains all signals generated during instruction decode that control execution,
/// memory access and write-back for the current instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is an unconditional jump (`JAL`).
    pub jump: bool,
    /// Write-back value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Coarse ALU operation class.
    pub alu_class: AluOpClass,
    /// Value of `rs2`, the payload of a store.
    pub rs2_val: u32,
    /// funct3 field; selects the store width and the register-class ALU operation.
    pub funct3: u32,
    /// funct7 field as seen by the ALU control generator (zero where the format has none).
    pub funct7: u32,
    /// Resolved branch or jump displacement in bytes.
    pub branch_imm: i32,
}

impl ControlSignals {
    /// Returns the width of the store described by these signals.
    pub const fn store_width(&self) -> MemWidth {
        MemWidth::from_store_funct3(self.funct3)
    }
}
