//! Single-cycle instruction datapath.
//!
//! Each instruction passes through every phase before the next one is fetched;
//! phases never overlap. It includes the following components:
//! 1. **Latches:** Transient per-cycle values threaded between phases.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Fetch, Decode, Execute, Memory, Writeback and the clock tick.

/// Per-cycle values carried between phases (EX/MEM, MEM/WB, retirement record).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Phase implementations (fetch, decode, execute, memory, writeback, clock tick).
pub mod stages;
