//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and touch nothing but the
//! named flag and PC.

use crate::{ExecutionError, MemoryBus, StatusRegister, CPU};

fn set_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: fn(&mut StatusRegister) -> &mut bool,
    value: bool,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    *flag(&mut cpu.status) = value;
    Ok(())
}

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use cpu6510::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.load(0x0000, &[0x18]); // CLC
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x0001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.carry, false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.carry, true)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.interrupt_disable, false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.interrupt_disable, true)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.decimal_mode, false)
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.decimal_mode, true)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    set_flag(cpu, |s| &mut s.overflow, false)
}
