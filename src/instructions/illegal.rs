//! # Undocumented Instructions
//!
//! Only two undocumented opcodes are modeled:
//! - JAM (also known as KIL): freezes the CPU
//! - SLO: ASL a memory location, then ORA the result into the accumulator

use crate::instructions::shifts::shift_left;
use crate::{ExecutionError, MemoryBus, OPCODE_TABLE, CPU};

/// Executes the JAM instruction.
///
/// The CPU stops on the opcode: PC is not advanced and every later step is
/// a no-op until reset.
pub(crate) fn execute_jam<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.jammed = true;
    Ok(())
}

/// Executes the SLO (Shift Left then OR) instruction.
///
/// Shifts the addressed byte left exactly like ASL (bit 7 into carry),
/// writes it back, then ORs it into the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Bit 7 of the original memory value
/// - Zero (Z), Negative (N): From the final accumulator
pub(crate) fn execute_slo<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.resolve_address(metadata.mnemonic, metadata.addressing_mode)?;
    let shifted = shift_left(&mut cpu.status, cpu.memory.read(addr));
    cpu.memory.write(addr, shifted);

    cpu.a |= shifted;
    cpu.status.set_zero_negative(cpu.a);

    Ok(())
}
