//! Main Execution Cycle.
//!
//! This module implements the single-cycle execution step of the CPU. It performs the following:
//! 1. **Phase Coordination:** Runs fetch, decode, execute, memory, writeback and the clock tick in order.
//! 2. **Fault Containment:** Aborts the cycle at the first failing phase, before any commit.
//! 3. **Observability:** Updates statistics and emits per-instruction trace events.

use super::Cpu;
use crate::common::error::Trap;
use crate::core::pipeline::latches::Retired;
use crate::core::pipeline::stages::{
    clock_tick, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// Registers, memory, the PC and the Next-PC are left untouched when a
    /// trap is raised by fetch, decode or the memory phase.
    ///
    /// # Returns
    ///
    /// A summary of the retired instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] raised by the failing phase.
    pub fn tick(&mut self) -> Result<Retired, Trap> {
        let pc = self.pc;
        let inst = fetch_stage(self)?;
        let id = decode_stage(self, inst)?;
        let ex = execute_stage(self, &id);
        let wb = mem_stage(self, &id.signals, &ex)?;
        wb_stage(self, &id.signals, id.rd, &wb);
        clock_tick(self, ex.next_pc);

        let retired = Retired {
            pc,
            inst,
            next_pc: self.pc,
            branch_taken: ex.branch_taken,
        };
        self.stats.record(&id.signals, retired.branch_taken);

        if self.trace {
            tracing::trace!(
                pc = format_args!("{pc:#010x}"),
                inst = format_args!("{inst:#010x}"),
                next_pc = format_args!("{:#010x}", self.pc),
                "{}",
                disassemble(inst)
            );
        }

        Ok(retired)
    }
}
