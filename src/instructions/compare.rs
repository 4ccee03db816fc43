//! # Compare Instructions
//!
//! This module implements register comparisons:
//! - CMP: Compare Accumulator
//! - CPX: Compare X Register
//! - CPY: Compare Y Register
//!
//! A compare subtracts the operand from the register without storing the
//! difference. Z and N come from the 8-bit difference, C is set when the
//! register is greater than or equal to the operand (unsigned).

use crate::{ExecutionError, MemoryBus, OPCODE_TABLE, CPU};

fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    register: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;

    cpu.status.set_zero_negative(register.wrapping_sub(value));
    cpu.status.carry = register >= value;

    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if A >= M
/// - Zero (Z): Set if A == M
/// - Negative (N): Set if bit 7 of A - M is set
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let register = cpu.a;
    compare(cpu, opcode, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let register = cpu.x;
    compare(cpu, opcode, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let register = cpu.y;
    compare(cpu, opcode, register)
}
