//! # Increment and Decrement Instructions
//!
//! This module implements the index register counters:
//! - INX, INY: Increment X / Y
//! - DEX, DEY: Decrement X / Y
//!
//! Values wrap at 8 bits and update Z and N.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.y);
    Ok(())
}
