//! Memory Access (MEM) Phase.
//!
//! Stores write one byte (`SB`) or a little-endian word (every other store
//! width) at the ALU-computed address; loads read a little-endian word from it.
//! Instructions that neither load nor store pass straight through.

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::signals::{ControlSignals, MemWidth};

/// Executes the memory phase.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `signals` - Control signals of the current instruction
/// * `ex` - Output of the execute phase
///
/// # Errors
///
/// Returns [`Trap::MemoryOutOfBounds`] when the access leaves the data memory.
pub fn mem_stage(cpu: &mut Cpu, signals: &ControlSignals, ex: &ExMem) -> Result<MemWb, Trap> {
    let addr = ex.alu_result;
    let mut mem_data = 0;

    if signals.mem_write {
        match signals.store_width() {
            MemWidth::Byte => cpu.memory.store_byte(addr, signals.rs2_val as u8)?,
            MemWidth::Word => cpu.memory.store_word(addr, signals.rs2_val)?,
        }
    } else if signals.mem_read {
        mem_data = cpu.memory.load_word(addr)?;
    }

    Ok(MemWb {
        alu_result: ex.alu_result,
        mem_data,
    })
}
