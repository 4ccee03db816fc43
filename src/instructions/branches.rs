//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The offset is added to the address of the following instruction, i.e.
//! after both the opcode and the offset byte have been consumed.
//!
//! No flags are affected.

use crate::{ExecutionError, MemoryBus, CPU};

/// Consumes the branch and, if `condition` holds, jumps by its offset.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    let offset = cpu.immediate() as i8;

    if condition {
        cpu.pc = cpu.pc.wrapping_add_signed(offset as i16);
    }

    Ok(())
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = !cpu.status.negative;
    branch(cpu, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = cpu.status.negative;
    branch(cpu, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = !cpu.status.overflow;
    branch(cpu, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = cpu.status.overflow;
    branch(cpu, condition)
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Examples
///
/// ```
/// use cpu6510::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.load(0xC000, &[0x90, 0xFC]); // BCC -4
/// cpu.set_pc(0xC000);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0xBFFE);
/// ```
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = !cpu.status.carry;
    branch(cpu, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = cpu.status.carry;
    branch(cpu, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = !cpu.status.zero;
    branch(cpu, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let condition = cpu.status.zero;
    branch(cpu, condition)
}
