//! # 6510 CPU Emulator Core
//!
//! An instruction-level emulator for the MOS 6510: accumulator, two index
//! registers, an 8-bit stack pointer, eight status flags and a flat 64KB
//! address space. Programs execute with the same flag side effects,
//! addressing-mode wraparound, stack discipline and relative-branch
//! arithmetic as the hardware.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6510::CPU;
//!
//! let mut cpu = CPU::new();
//!
//! // LDA #$10
//! cpu.load(0x0000, &[0xA9, 0x10]);
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x10);
//! assert_eq!(cpu.pc(), 0x0002);
//! assert!(!cpu.flag_z());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `status` - Status register flags and byte packing
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - The 256-entry opcode table shared by execution and disassembly
//! - `addressing` - Addressing modes and operand resolution
//! - `disassembler` - Opcode stream to assembly text
//!
//! Execution is fully synchronous and deterministic. Hosts that load
//! programs or share memory with peripherals do so between steps.

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{ExecutionState, CPU};
pub use disassembler::{
    decode_instruction, disassemble, disassemble_reader, format_instruction, format_listing,
    DisassemblyOptions, Instruction,
};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, OpcodeMetadata, Operation, OPCODE_TABLE};
pub use status::StatusRegister;

/// Errors that can occur during CPU execution.
///
/// Reaching the JAM state is not an error: it is reported through
/// [`CPU::state`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry the core can execute.
    ///
    /// No state was modified by the failed step.
    #[error("unknown opcode ${opcode:02X} at ${address:04X}")]
    UnknownOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        address: u16,
    },

    /// An instruction asked for an effective address in a mode that has none.
    #[error("{mnemonic} cannot resolve an address in {mode:?} mode")]
    InvalidAddressingMode {
        /// Mnemonic of the instruction that asked for the address.
        mnemonic: &'static str,
        /// The mode that has no effective address.
        mode: AddressingMode,
    },
}
