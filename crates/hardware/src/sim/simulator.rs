//! Simulator: owns the CPU and drives it until the program halts.
//!
//! The halt test runs before every cycle, so an empty program executes no
//! instructions and the last loaded word executes exactly once.

use std::path::Path;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::latches::Retired;
use crate::isa::abi;
use crate::sim::loader;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, data memory, program, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator holding `program`.
    pub fn new(config: &Config, program: Vec<u32>) -> Self {
        Self {
            cpu: Cpu::new(config, program),
        }
    }

    /// Loads a hex program file and creates a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFile`] or [`SimError::ProgramLoad`]; no cycle runs in either case.
    pub fn from_file(config: &Config, path: impl AsRef<Path>) -> Result<Self, SimError> {
        let program = loader::load_program_file(path)?;
        Ok(Self::new(config, program))
    }

    /// Returns true once the PC has reached or passed `4 * instruction_count`.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Advances the simulator by one cycle.
    ///
    /// # Returns
    ///
    /// `Ok(None)` without running a cycle when the machine has halted.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trap`] tagged with the PC of the failing instruction.
    pub fn step(&mut self) -> Result<Option<Retired>, SimError> {
        if self.is_halted() {
            return Ok(None);
        }
        let pc = self.cpu.pc;
        match self.cpu.tick() {
            Ok(retired) => Ok(Some(retired)),
            Err(trap) => {
                tracing::warn!(pc = format_args!("{pc:#010x}"), %trap, "run aborted");
                Err(SimError::Trap { pc, trap })
            }
        }
    }

    /// Runs until the program halts.
    ///
    /// # Returns
    ///
    /// The number of cycles executed by this call.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimError::Trap`]; the machine is left in the state
    /// preceding the failing instruction.
    pub fn run(&mut self) -> Result<u64, SimError> {
        let mut cycles = 0;
        while self.step()?.is_some() {
            cycles += 1;
        }
        tracing::debug!(
            cycles,
            pc = format_args!("{:#010x}", self.cpu.pc),
            "program halted"
        );
        Ok(cycles)
    }

    /// Returns the conventional result pair `(a0, a1)`.
    pub const fn result(&self) -> (u32, u32) {
        (
            self.cpu.read_register(abi::REG_A0),
            self.cpu.read_register(abi::REG_A1),
        )
    }
}
