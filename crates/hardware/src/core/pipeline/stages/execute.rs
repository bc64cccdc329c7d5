//! Execute (EX) Phase.
//!
//! Resolves the ALU result and the Next-PC for the current instruction:
//! - jumps write the return address `pc + 4` and target `pc + displacement`
//!   without engaging the ALU;
//! - branches subtract the operands and take the displacement when the result is zero;
//! - everything else computes the ALU result and falls through to `pc + 4`.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::ExMem;
use crate::core::units::alu::{Alu, control};
use crate::core::units::control::DecodedInstruction;

/// Executes the execute phase.
///
/// Nothing architectural is written; the Next-PC is carried in the returned
/// latch until the clock tick commits it.
///
/// # Arguments
///
/// * `cpu` - Reference to the CPU state
/// * `id` - Output of the decode phase
///
/// # Returns
///
/// The EX/MEM values: the ALU result, the Next-PC and, for branches, the
/// branch outcome.
pub fn execute_stage(cpu: &Cpu, id: &DecodedInstruction) -> ExMem {
    let signals = &id.signals;
    let pc = cpu.pc;
    let fallthrough = pc.wrapping_add(INSTRUCTION_SIZE);
    let target = pc.wrapping_add_signed(signals.branch_imm);

    if signals.jump {
        return ExMem {
            alu_result: fallthrough,
            next_pc: target,
            branch_taken: None,
        };
    }

    let op = control::generate(signals.alu_class, signals.funct3, signals.funct7);
    let alu_result = Alu::execute(op, id.operand1, id.operand2);

    if signals.branch {
        let taken = alu_result == 0;
        return ExMem {
            alu_result,
            next_pc: if taken { target } else { fallthrough },
            branch_taken: Some(taken),
        };
    }

    ExMem {
        alu_result,
        next_pc: fallthrough,
        branch_taken: None,
    }
}
