//! 6510 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//!
//! Decoding reads the same [`OPCODE_TABLE`](crate::OPCODE_TABLE) that drives
//! execution, so the disassembly of a byte stream always names the
//! instructions the CPU would run. The disassembler never touches CPU state.

pub mod decoder;
pub mod formatter;

use std::io::{self, Read};

use log::debug;

use crate::addressing::AddressingMode;

pub use decoder::decode_instruction;
pub use formatter::{format_instruction, format_listing};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP"), or ".byte" for data
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// Builds the `.byte` pseudo-instruction for a byte that does not decode.
    pub fn data_byte(address: u16, byte: u8) -> Self {
        Self {
            address,
            opcode: byte,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
        }
    }

    /// Returns true for a `.byte` pseudo-instruction.
    pub fn is_data(&self) -> bool {
        self.mnemonic == ".byte"
    }

    /// Returns the raw bytes of the instruction: opcode then operands.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and branch targets)
    pub start_address: u16,

    /// Whether listings include the raw instruction bytes
    pub hex_dump: bool,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Bytes that do not start a complete, documented instruction become one
/// `.byte` pseudo-instruction each, and decoding resumes at the next byte.
///
/// # Examples
///
/// ```
/// use cpu6510::{disassemble, format_instruction, DisassemblyOptions};
///
/// let program = [0xA9, 0x10, 0x8D, 0x00, 0x02, 0xFF];
/// let text: Vec<String> = disassemble(&program, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(text, ["LDA #$10", "STA $0200", ".byte $FF"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while offset < bytes.len() {
        let instr = decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[offset]));

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Disassemble everything a reader yields, such as a program image file or
/// standard input.
///
/// Reader errors are returned unchanged.
pub fn disassemble_reader<R: Read>(
    mut reader: R,
    options: DisassemblyOptions,
) -> io::Result<Vec<Instruction>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    debug!(
        "disassembling {} bytes from ${:04X}",
        bytes.len(),
        options.start_address
    );

    Ok(disassemble(&bytes, options))
}
