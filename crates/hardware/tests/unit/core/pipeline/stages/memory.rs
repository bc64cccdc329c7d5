//! Memory Stage Unit Tests.

use rv32sim_core::common::Trap;
use rv32sim_core::core::pipeline::latches::ExMem;
use rv32sim_core::core::pipeline::signals::ControlSignals;
use rv32sim_core::core::pipeline::stages::mem_stage;

use crate::common::harness::TestContext;

fn at(addr: u32) -> ExMem {
    ExMem {
        alu_result: addr,
        next_pc: 0,
        branch_taken: None,
    }
}

#[test]
fn test_store_word() {
    let mut tc = TestContext::new();
    let signals = ControlSignals {
        mem_write: true,
        rs2_val: 0xDEAD_BEEF,
        funct3: 0b010,
        ..Default::default()
    };
    let wb = mem_stage(tc.cpu_mut(), &signals, &at(8)).unwrap();
    assert_eq!(wb.mem_data, 0);
    assert_eq!(wb.alu_result, 8);
    assert_eq!(tc.cpu().memory.load_word(8), Ok(0xDEAD_BEEF));
}

#[test]
fn test_store_byte_uses_low_byte() {
    let mut tc = TestContext::new();
    let signals = ControlSignals {
        mem_write: true,
        rs2_val: 0x1234_56AB,
        funct3: 0b000,
        ..Default::default()
    };
    let _ = mem_stage(tc.cpu_mut(), &signals, &at(3)).unwrap();
    assert_eq!(tc.cpu().memory.load_word(0), Ok(0xAB00_0000));
}

#[test]
fn test_load_reads_word() {
    let mut tc = TestContext::new();
    tc.cpu_mut().memory.store_word(0x100, 0x0102_0304).unwrap();
    let signals = ControlSignals {
        mem_read: true,
        ..Default::default()
    };
    let wb = mem_stage(tc.cpu_mut(), &signals, &at(0x100)).unwrap();
    assert_eq!(wb.mem_data, 0x0102_0304);
}

#[test]
fn test_no_access_for_alu_instructions() {
    let mut tc = TestContext::new();
    let signals = ControlSignals {
        reg_write: true,
        ..Default::default()
    };
    // Address far outside memory; no access means no trap.
    let wb = mem_stage(tc.cpu_mut(), &signals, &at(0xFFFF_0000)).unwrap();
    assert_eq!(wb.alu_result, 0xFFFF_0000);
}

#[test]
fn test_load_out_of_bounds() {
    let mut tc = TestContext::new();
    let signals = ControlSignals {
        mem_read: true,
        ..Default::default()
    };
    assert_eq!(
        mem_stage(tc.cpu_mut(), &signals, &at(4096)),
        Err(Trap::MemoryOutOfBounds {
            addr: 4096,
            width: 4,
            size: 4096
        })
    );
}
