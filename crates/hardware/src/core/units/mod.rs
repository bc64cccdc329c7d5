//! Execution units and functional components.
//!
//! This module contains the stateless units invoked by the cycle phases:
//! the control unit (instruction decoder) and the ALU with its control generator.

/// Arithmetic Logic Unit and ALU control generator.
pub mod alu;

/// Control unit: turns an instruction word into operands and control signals.
pub mod control;
