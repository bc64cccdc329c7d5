//! # Simulator Driver Tests

use std::io::Write;

use rv32sim_core::common::SimError;
use rv32sim_core::config::Config;
use rv32sim_core::{Cpu, Simulator};
use tempfile::NamedTempFile;

use crate::common::builder::instruction::inst;
use crate::common::harness::to_hex_program;

#[test]
fn test_step_returns_retired_record() {
    let jal = inst().jal(1, 8).build();
    let mut sim = Simulator::new(&Config::default(), vec![jal, 0, 0]);
    let retired = sim.step().unwrap().unwrap();
    assert_eq!(retired.pc, 0);
    assert_eq!(retired.inst, jal);
    assert_eq!(retired.next_pc, 8);
    assert_eq!(retired.branch_taken, None);
}

#[test]
fn test_step_after_halt_does_nothing() {
    let mut sim = Simulator::new(&Config::default(), vec![inst().addi(10, 0, 1).build()]);
    assert!(sim.step().unwrap().is_some());
    assert!(sim.is_halted());
    assert!(sim.step().unwrap().is_none());
    assert_eq!(sim.cpu.stats.cycles, 1);
}

#[test]
fn test_from_file_runs_program() {
    let program = [
        inst().addi(10, 0, 40).build(),
        inst().addi(11, 0, 2).build(),
        inst().add(10, 10, 11).build(),
    ];
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(to_hex_program(&program).as_bytes()).unwrap();

    let mut sim = Simulator::from_file(&Config::default(), file.path()).unwrap();
    assert_eq!(sim.run().unwrap(), 3);
    assert_eq!(sim.result(), (42, 2));
}

#[test]
fn test_from_file_rejects_partial_word_before_running() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"13\n05\n").unwrap();
    let err = Simulator::from_file(&Config::default(), file.path()).unwrap_err();
    assert!(matches!(err, SimError::ProgramLoad { line: 2, .. }));
}

#[test]
fn test_result_is_unsigned_register_contents() {
    let mut sim = Simulator::new(&Config::default(), vec![inst().addi(10, 0, -1).build()]);
    let _ = sim.run().unwrap();
    assert_eq!(sim.result(), (u32::MAX, 0));
}

#[test]
fn test_config_sizes_memory_and_start_pc() {
    let config = Config::from_json(r#"{"general":{"start_pc":4},"memory":{"data_size":16}}"#).unwrap();
    let cpu = Cpu::new(&config, vec![0, inst().addi(10, 0, 1).build()]);
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.memory.size(), 16);

    let mut sim = Simulator::new(&config, cpu.program().to_vec());
    assert_eq!(sim.run().unwrap(), 1);
    assert_eq!(sim.result(), (1, 0));
}

#[test]
fn test_small_memory_traps_on_store() {
    let config = Config::from_json(r#"{"memory":{"data_size":16}}"#).unwrap();
    let mut sim = Simulator::new(&config, vec![inst().sw(0, 0, 16).build()]);
    let err = sim.run().unwrap_err();
    assert!(err.to_string().contains("MemoryOutOfBounds(addr=0x10, width=4, size=16)"));
}
