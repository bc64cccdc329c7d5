//! Writeback (WB) Phase.
//!
//! Commits the load data or the ALU result to the destination register when
//! the instruction writes a register. Writes to `x0` are dropped by the
//! register file.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::signals::ControlSignals;

/// Executes the writeback phase.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `signals` - Control signals of the current instruction
/// * `rd` - Destination register index
/// * `wb` - Output of the memory phase
pub const fn wb_stage(cpu: &mut Cpu, signals: &ControlSignals, rd: usize, wb: &MemWb) {
    if signals.reg_write {
        let val = if signals.mem_to_reg {
            wb.mem_data
        } else {
            wb.alu_result
        };
        cpu.regs.write(rd, val);
    }
}
