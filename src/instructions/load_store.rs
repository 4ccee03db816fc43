//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value. Stores never touch flags.

use crate::{ExecutionError, MemoryBus, OPCODE_TABLE, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.a = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;
    cpu.status.set_zero_negative(cpu.a);

    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, applied to X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;
    cpu.status.set_zero_negative(cpu.x);

    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, applied to Y.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.resolve_operand(metadata.mnemonic, metadata.addressing_mode)?;
    cpu.status.set_zero_negative(cpu.y);

    Ok(())
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, value: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.resolve_address(metadata.mnemonic, metadata.addressing_mode)?;
    cpu.memory.write(addr, value);

    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, opcode, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, opcode, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, opcode, value)
}
