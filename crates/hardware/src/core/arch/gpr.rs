//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RV32 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`), 32 bits each.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::NUM_REGISTERS;
use crate::isa::abi::REG_NAMES;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Only the low five bits are used.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` always returns 0.
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx % NUM_REGISTERS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are silently discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Only the low five bits are used.
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx % NUM_REGISTERS;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a snapshot of all 32 registers, `x0` included.
    pub const fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal and signed decimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "x{:<2} {:<4}={:#010x} ({:>11})   x{:<2} {:<4}={:#010x} ({:>11})",
                i,
                REG_NAMES[i],
                self.regs[i],
                self.regs[i] as i32,
                i + 1,
                REG_NAMES[i + 1],
                self.regs[i + 1],
                self.regs[i + 1] as i32
            );
        }
    }
}
