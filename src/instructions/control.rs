//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Break
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (high byte first) and RTS
//! resumes one past the pulled address, so a JSR/RTS pair lands on the
//! instruction following the JSR.

use crate::{ExecutionError, MemoryBus, OPCODE_TABLE, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The indirect form never crosses a page when fetching the pointer's high
/// byte: JMP ($10FF) reads from $10FF and $1000 (not $1100).
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.resolve_address(metadata.mnemonic, metadata.addressing_mode)?;

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Stack operation:
/// 1. Consume the 3-byte instruction
/// 2. Push high byte of (PC - 1)
/// 3. Push low byte of (PC - 1)
/// 4. Jump to the target
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use cpu6510::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.load(0x0600, &[0x20, 0x34, 0x12]); // JSR $1234
/// cpu.set_pc(0x0600);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x1234);
/// assert_eq!(cpu.read_byte(0x01FF), 0x06);
/// assert_eq!(cpu.read_byte(0x01FE), 0x02);
/// assert_eq!(cpu.sp(), 0xFD);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.resolve_address(metadata.mnemonic, metadata.addressing_mode)?;
    let [lo, hi] = cpu.pc.wrapping_sub(1).to_le_bytes();

    cpu.push(hi);
    cpu.push(lo);
    cpu.pc = target;

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the low byte, then the high byte, and continues one past the
/// reconstructed address.
///
/// Flags affected: None
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let lo = cpu.pull();
    let hi = cpu.pull();

    cpu.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);

    Ok(())
}

/// Executes the BRK (Break) instruction.
///
/// Sets the break and interrupt disable flags and skips the padding byte
/// that follows the opcode, advancing PC by 2.
///
/// Flags affected:
/// - B: Set to 1
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.status.break_command = true;
    cpu.status.interrupt_disable = true;

    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.consume_opcode();
    Ok(())
}
