//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes to 0x0100 | SP and then decrements SP, a pull increments SP
//! and then reads. SP wraps within the page in both directions.

use crate::{ExecutionError, MemoryBus, StatusRegister, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use cpu6510::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.load(0x0000, &[0x48]); // PHA
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.read_byte(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.pc(), 0x0001);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.push(cpu.a);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the live flags packed into a byte, bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.push(cpu.status.to_byte());
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the pulled value is 0
/// - Negative (N): Set if bit 7 of the pulled value is set
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.a = cpu.pull();
    cpu.status.set_zero_negative(cpu.a);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag, break included, is replaced from the pulled byte.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.status = StatusRegister::from_byte(cpu.pull());
    Ok(())
}
