//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions and host throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Branch outcomes:** Taken and not-taken conditional branches.

use std::time::Instant;

use crate::core::pipeline::signals::ControlSignals;

/// Simulation statistics structure tracking execution metrics.
///
/// Every cycle retires exactly one instruction, so `cycles` and
/// `instructions_retired` advance together; both are kept so the report
/// reads like a pipelined machine's.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of ALU (OP, OP-IMM, LUI) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of unconditional jump instructions retired.
    pub inst_jump: u64,

    /// Conditional branches that were taken.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `signals` - Control signals the instruction executed with.
    /// * `branch_taken` - Branch outcome, `None` for non-branch instructions.
    pub const fn record(&mut self, signals: &ControlSignals, branch_taken: Option<bool>) {
        self.cycles += 1;
        self.instructions_retired += 1;

        if signals.jump {
            self.inst_jump += 1;
        } else if signals.branch {
            self.inst_branch += 1;
        } else if signals.mem_read {
            self.inst_load += 1;
        } else if signals.mem_write {
            self.inst_store += 1;
        } else {
            self.inst_alu += 1;
        }

        match branch_taken {
            Some(true) => self.branches_taken += 1,
            Some(false) => self.branches_not_taken += 1,
            None => {}
        }
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let cyc = self.cycles.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("RV32 SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", cyc / instr);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        println!("  br.taken               {}", self.branches_taken);
        println!("  br.not_taken           {}", self.branches_not_taken);
        println!("==========================================================");
    }
}
