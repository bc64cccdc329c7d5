//! Clock tick.
//!
//! Commits the Next-PC resolved by the execute phase, ending the cycle.

use crate::core::Cpu;

/// Latches `next_pc` into `cpu.next_pc` and commits it into `cpu.pc`.
///
/// This is the only phase that writes either register, so a cycle aborted
/// by an earlier trap leaves both untouched.
pub const fn clock_tick(cpu: &mut Cpu, next_pc: u32) {
    cpu.next_pc = next_pc;
    cpu.pc = next_pc;
}
