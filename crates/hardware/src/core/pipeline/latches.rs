//! Per-cycle values threaded between phases.
//!
//! Nothing here outlives the cycle that produced it; the next cycle starts
//! from the architectural state in [`Cpu`](crate::core::Cpu) only.

/// Output of the execute phase (EX/MEM).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExMem {
    /// ALU result: effective address for memory ops, return address for `JAL`.
    pub alu_result: u32,
    /// Next-PC resolved by execute; committed only by the clock tick.
    pub next_pc: u32,
    /// Branch outcome; `None` for non-branch instructions.
    pub branch_taken: Option<bool>,
}

/// Output of the memory phase (MEM/WB).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWb {
    /// ALU result forwarded from execute.
    pub alu_result: u32,
    /// Word read by a load; zero otherwise.
    pub mem_data: u32,
}

/// Summary of one completed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// PC the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// PC committed by the clock tick.
    pub next_pc: u32,
    /// Branch outcome; `None` for non-branch instructions.
    pub branch_taken: Option<bool>,
}
