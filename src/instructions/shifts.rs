//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each operates on the accumulator or read-modify-writes a memory location.
//! The bit shifted out lands in carry; rotates shift the old carry in.

use crate::{AddressingMode, ExecutionError, MemoryBus, StatusRegister, OPCODE_TABLE, CPU};

/// Applies `shift` to the accumulator or to the addressed memory location.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    shift: fn(&mut StatusRegister, u8) -> u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.addressing_mode == AddressingMode::Accumulator {
        cpu.consume_opcode();
        cpu.a = shift(&mut cpu.status, cpu.a);
    } else {
        let addr = cpu.resolve_address(metadata.mnemonic, metadata.addressing_mode)?;
        let value = cpu.memory.read(addr);
        let result = shift(&mut cpu.status, value);
        cpu.memory.write(addr, result);
    }

    Ok(())
}

/// Shifts left, bit 7 into carry. Shared with SLO.
pub(crate) fn shift_left(status: &mut StatusRegister, value: u8) -> u8 {
    let result = value << 1;
    status.carry = value & 0x80 != 0;
    status.set_zero_negative(result);
    result
}

fn shift_right(status: &mut StatusRegister, value: u8) -> u8 {
    let result = value >> 1;
    status.carry = value & 0x01 != 0;
    // Bit 7 is always 0 here, so N is always cleared.
    status.set_zero_negative(result);
    result
}

fn rotate_left(status: &mut StatusRegister, value: u8) -> u8 {
    let result = (value << 1) | status.carry as u8;
    status.carry = value & 0x80 != 0;
    status.set_zero_negative(result);
    result
}

fn rotate_right(status: &mut StatusRegister, value: u8) -> u8 {
    let result = (value >> 1) | ((status.carry as u8) << 7);
    status.carry = value & 0x01 != 0;
    status.set_zero_negative(result);
    result
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
/// Updates C, Z, and N flags.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, opcode, shift_left)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N always
/// ends up clear. Updates C, Z, and N flags.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, opcode, shift_right)
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0 and bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, opcode, rotate_left)
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7 and bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, opcode, rotate_right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left_carries_through() {
        let mut status = StatusRegister {
            carry: true,
            ..Default::default()
        };

        assert_eq!(rotate_left(&mut status, 0b1000_0000), 0b0000_0001);
        assert!(status.carry);
        assert!(!status.zero);
    }

    #[test]
    fn test_rotate_right_carries_through() {
        let mut status = StatusRegister {
            carry: true,
            ..Default::default()
        };

        assert_eq!(rotate_right(&mut status, 0b0000_0010), 0b1000_0001);
        assert!(!status.carry);
        assert!(status.negative);
    }

    #[test]
    fn test_shift_right_clears_negative() {
        let mut status = StatusRegister {
            negative: true,
            ..Default::default()
        };

        assert_eq!(shift_right(&mut status, 0xFF), 0x7F);
        assert!(status.carry);
        assert!(!status.negative);
    }
}
