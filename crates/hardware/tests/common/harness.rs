use rv32sim_core::Simulator;
use rv32sim_core::common::SimError;
use rv32sim_core::config::Config;
use rv32sim_core::core::Cpu;

#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator,
    config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        Self {
            sim: Simulator::new(&config, Vec::new()),
            config,
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Replaces the machine with a fresh one holding `instructions` at address 0.
    ///
    /// Registers and memory are reset, so call this before `set_reg`.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        self.sim = Simulator::new(&self.config, instructions.to_vec());
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Executes one instruction; panics if the machine has halted or traps.
    pub fn step(&mut self) {
        let retired = self.sim.step().expect("cycle trapped");
        assert!(retired.is_some(), "stepped a halted machine");
    }

    /// Runs to completion, returning the cycle count.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.sim.run()
    }
}

/// Renders instruction words in the loader's hex-byte-per-line format.
pub fn to_hex_program(words: &[u32]) -> String {
    words
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .map(|b| format!("{b:02x}\n"))
        .collect()
}
