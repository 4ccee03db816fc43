//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY: Accumulator to X / Y
//! - TXA, TYA: X / Y to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer into A, X or Y updates Z and N. TXS changes no flags.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.x = cpu.a;
    cpu.status.set_zero_negative(cpu.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.y = cpu.a;
    cpu.status.set_zero_negative(cpu.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.a = cpu.x;
    cpu.status.set_zero_negative(cpu.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.a = cpu.y;
    cpu.status.set_zero_negative(cpu.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.x = cpu.sp;
    cpu.status.set_zero_negative(cpu.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS does not affect any flags.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.sp = cpu.x;
    Ok(())
}
