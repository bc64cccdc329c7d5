//! Fetch Stage Unit Tests.

use rv32sim_core::common::Trap;
use rv32sim_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::{NOP, inst};
use crate::common::harness::TestContext;

#[test]
fn test_fetch_reads_word_at_pc() {
    let lui = inst().lui(1, 0xABCDE).build();
    let mut tc = TestContext::new().load_program(&[NOP, lui]);
    tc.cpu_mut().pc = 4;
    assert_eq!(fetch_stage(tc.cpu()), Ok(lui));
}

#[test]
fn test_fetch_past_end_faults() {
    let mut tc = TestContext::new().load_program(&[NOP, NOP]);
    tc.cpu_mut().pc = 8;
    assert_eq!(fetch_stage(tc.cpu()), Err(Trap::InstructionAccessFault(8)));
}

#[test]
fn test_fetch_misaligned_faults() {
    let mut tc = TestContext::new().load_program(&[NOP, NOP]);
    tc.cpu_mut().pc = 1;
    assert_eq!(
        fetch_stage(tc.cpu()),
        Err(Trap::InstructionAddressMisaligned(1))
    );
}

#[test]
fn test_max_address_is_four_per_instruction() {
    let tc = TestContext::new().load_program(&[NOP, NOP, NOP]);
    assert_eq!(tc.cpu().max_address(), 12);
    assert_eq!(tc.cpu().program().len(), 3);
}
