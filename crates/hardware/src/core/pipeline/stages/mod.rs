//! Cycle phase implementations.
//!
//! This module contains the individual phases executed, in order, for every
//! instruction. It includes:
//! 1. **Fetch:** Retrieves the instruction word at the PC.
//! 2. **Decode:** Runs the control unit to produce operands and control signals.
//! 3. **Execute:** Performs the ALU operation and resolves the Next-PC.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file.
//! 6. **Clock tick:** Commits the Next-PC.

/// Clock tick (PC commit) implementation.
pub mod clock;

/// Instruction decode phase implementation.
pub mod decode;

/// Instruction execute phase implementation.
pub mod execute;

/// Instruction fetch phase implementation.
pub mod fetch;

/// Memory access phase implementation.
pub mod memory;

/// Writeback phase implementation.
pub mod writeback;

/// Clock tick entry point.
pub use clock::clock_tick;
/// Decode phase entry point (ID).
pub use decode::decode_stage;
/// Execute phase entry point (EX).
pub use execute::execute_stage;
/// Fetch phase entry point (IF).
pub use fetch::fetch_stage;
/// Memory phase entry point (MEM).
pub use memory::mem_stage;
/// Writeback phase entry point (WB).
pub use writeback::wb_stage;
