//! # Bitwise Instructions
//!
//! This module implements the logical operations on the accumulator:
//! - AND: Logical AND
//! - ORA: Logical OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//!
//! AND, ORA and EOR store their result in the accumulator and update Z and N
//! from it. Carry and overflow are never touched.

use crate::{ExecutionError, MemoryBus, OPCODE_TABLE, CPU};

/// Combines the accumulator with the operand and stores the result.
fn bitwise<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    combine: fn(u8, u8) -> u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;

    cpu.a = combine(cpu.a, value);
    cpu.status.set_zero_negative(cpu.a);

    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    bitwise(cpu, opcode, |a, value| a | value)
}

/// Executes the AND (Logical AND) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    bitwise(cpu, opcode, |a, value| a & value)
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    bitwise(cpu, opcode, |a, value| a ^ value)
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with the operand without storing the result.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M is 0
/// - Negative (N): Copied from bit 7 of M
/// - Overflow (V): Copied from bit 6 of M
/// - Accumulator: Not modified
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;

    cpu.status.zero = cpu.a & value == 0;
    cpu.status.negative = value & 0x80 != 0;
    cpu.status.overflow = value & 0x40 != 0;

    Ok(())
}
