//! Decode Stage Unit Tests.

use rv32sim_core::common::Trap;
use rv32sim_core::core::pipeline::stages::decode_stage;

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;

#[test]
fn test_decode_reads_current_registers() {
    let mut tc = TestContext::new().load_program(&[]);
    tc.set_reg(3, 100);
    tc.set_reg(4, 23);
    let id = decode_stage(tc.cpu(), inst().add(5, 3, 4).build()).unwrap();
    assert_eq!((id.operand1, id.operand2, id.rd), (100, 23, 5));
}

#[test]
fn test_decode_uses_pc_for_jal() {
    let mut tc = TestContext::new().load_program(&[]);
    tc.cpu_mut().pc = 0x30;
    let id = decode_stage(tc.cpu(), inst().jal(1, -16).build()).unwrap();
    assert_eq!(id.operand1, 0x30);
    assert_eq!(id.signals.branch_imm, -16);
}

#[test]
fn test_decode_rejects_system_opcode() {
    let tc = TestContext::new();
    // ECALL
    assert_eq!(
        decode_stage(tc.cpu(), 0x0000_0073),
        Err(Trap::UnsupportedOpcode {
            opcode: 0x73,
            inst: 0x0000_0073
        })
    );
}
