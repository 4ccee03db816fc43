//! # Opcode Table
//!
//! The 256-entry opcode table is the single source of truth for instruction
//! decoding. The execution loop reads the `operation` to dispatch, the
//! disassembler reads the `mnemonic` and `addressing_mode` to format, and both
//! read the same entry for a given byte.
//!
//! The table covers:
//! - **151 documented instructions**. ADC, SBC, INC, DEC and RTI are present
//!   for disassembly but carry no `operation`, so executing them faults.
//! - **JAM** on every KIL byte except 0x02, and **SLO** in its (zp,X) form.
//! - Every other byte is marked with the "???" mnemonic and no operation.

use crate::addressing::AddressingMode::{self, *};
use self::Operation::*;

/// An executable instruction, one variant per mnemonic the core runs.
///
/// The addressing mode comes from the table entry, so `Lda` covers all
/// eight LDA opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Bitwise
    Ora,
    And,
    Eor,
    Bit,
    // Shift / rotate
    Asl,
    Lsr,
    Rol,
    Ror,
    // Compare
    Cmp,
    Cpx,
    Cpy,
    // Load / store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Transfer
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Increment / decrement
    Inx,
    Iny,
    Dex,
    Dey,
    // Stack
    Pha,
    Pla,
    Php,
    Plp,
    // Branch
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    Bcc,
    Bcs,
    Bne,
    Beq,
    // Jump / subroutine / control
    Jmp,
    Jsr,
    Rts,
    Brk,
    Nop,
    // Flags
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,
    // Illegal
    Jam,
    Slo,
}

/// Metadata for a single opcode byte.
///
/// # Examples
///
/// ```
/// use cpu6510::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.operation, Some(Operation::Lda));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("LDA", "JAM", "???" for unmapped bytes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Encoded size in bytes (opcode + operands), 1-3.
    ///
    /// BRK is encoded as one byte even though it skips a padding byte when
    /// executed.
    pub size_bytes: u8,

    /// Handler to dispatch to, `None` when the core does not execute the byte.
    pub operation: Option<Operation>,
}

impl OpcodeMetadata {
    /// Whether the execution loop can run this opcode.
    pub const fn implemented(&self) -> bool {
        self.operation.is_some()
    }

    /// Whether this byte has a mnemonic, executable or not.
    pub fn is_mapped(&self) -> bool {
        self.mnemonic != "???"
    }
}

const fn op(mnemonic: &'static str, mode: AddressingMode, operation: Operation) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        size_bytes: 1 + mode.operand_bytes(),
        operation: Some(operation),
    }
}

const fn documented(mnemonic: &'static str, mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        size_bytes: 1 + mode.operand_bytes(),
        operation: None,
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    addressing_mode: Implicit,
    size_bytes: 1,
    operation: None,
};

/// Looks up the table entry for an opcode byte.
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6510::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert!(brk.implemented());
///
/// let unmapped = &OPCODE_TABLE[0x02];
/// assert_eq!(unmapped.mnemonic, "???");
/// assert!(!unmapped.implemented());
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ op("BRK", Implicit, Brk),
    /* 0x01 */ op("ORA", IndirectX, Ora),
    /* 0x02 */ ILLEGAL,
    /* 0x03 */ op("SLO", IndirectX, Slo),
    /* 0x04 */ ILLEGAL,
    /* 0x05 */ op("ORA", ZeroPage, Ora),
    /* 0x06 */ op("ASL", ZeroPage, Asl),
    /* 0x07 */ ILLEGAL,
    /* 0x08 */ op("PHP", Implicit, Php),
    /* 0x09 */ op("ORA", Immediate, Ora),
    /* 0x0A */ op("ASL", Accumulator, Asl),
    /* 0x0B */ ILLEGAL,
    /* 0x0C */ ILLEGAL,
    /* 0x0D */ op("ORA", Absolute, Ora),
    /* 0x0E */ op("ASL", Absolute, Asl),
    /* 0x0F */ ILLEGAL,
    /* 0x10 */ op("BPL", Relative, Bpl),
    /* 0x11 */ op("ORA", IndirectY, Ora),
    /* 0x12 */ op("JAM", Implicit, Jam),
    /* 0x13 */ ILLEGAL,
    /* 0x14 */ ILLEGAL,
    /* 0x15 */ op("ORA", ZeroPageX, Ora),
    /* 0x16 */ op("ASL", ZeroPageX, Asl),
    /* 0x17 */ ILLEGAL,
    /* 0x18 */ op("CLC", Implicit, Clc),
    /* 0x19 */ op("ORA", AbsoluteY, Ora),
    /* 0x1A */ ILLEGAL,
    /* 0x1B */ ILLEGAL,
    /* 0x1C */ ILLEGAL,
    /* 0x1D */ op("ORA", AbsoluteX, Ora),
    /* 0x1E */ op("ASL", AbsoluteX, Asl),
    /* 0x1F */ ILLEGAL,
    /* 0x20 */ op("JSR", Absolute, Jsr),
    /* 0x21 */ op("AND", IndirectX, And),
    /* 0x22 */ op("JAM", Implicit, Jam),
    /* 0x23 */ ILLEGAL,
    /* 0x24 */ op("BIT", ZeroPage, Bit),
    /* 0x25 */ op("AND", ZeroPage, And),
    /* 0x26 */ op("ROL", ZeroPage, Rol),
    /* 0x27 */ ILLEGAL,
    /* 0x28 */ op("PLP", Implicit, Plp),
    /* 0x29 */ op("AND", Immediate, And),
    /* 0x2A */ op("ROL", Accumulator, Rol),
    /* 0x2B */ ILLEGAL,
    /* 0x2C */ op("BIT", Absolute, Bit),
    /* 0x2D */ op("AND", Absolute, And),
    /* 0x2E */ op("ROL", Absolute, Rol),
    /* 0x2F */ ILLEGAL,
    /* 0x30 */ op("BMI", Relative, Bmi),
    /* 0x31 */ op("AND", IndirectY, And),
    /* 0x32 */ op("JAM", Implicit, Jam),
    /* 0x33 */ ILLEGAL,
    /* 0x34 */ ILLEGAL,
    /* 0x35 */ op("AND", ZeroPageX, And),
    /* 0x36 */ op("ROL", ZeroPageX, Rol),
    /* 0x37 */ ILLEGAL,
    /* 0x38 */ op("SEC", Implicit, Sec),
    /* 0x39 */ op("AND", AbsoluteY, And),
    /* 0x3A */ ILLEGAL,
    /* 0x3B */ ILLEGAL,
    /* 0x3C */ ILLEGAL,
    /* 0x3D */ op("AND", AbsoluteX, And),
    /* 0x3E */ op("ROL", AbsoluteX, Rol),
    /* 0x3F */ ILLEGAL,
    /* 0x40 */ documented("RTI", Implicit),
    /* 0x41 */ op("EOR", IndirectX, Eor),
    /* 0x42 */ op("JAM", Implicit, Jam),
    /* 0x43 */ ILLEGAL,
    /* 0x44 */ ILLEGAL,
    /* 0x45 */ op("EOR", ZeroPage, Eor),
    /* 0x46 */ op("LSR", ZeroPage, Lsr),
    /* 0x47 */ ILLEGAL,
    /* 0x48 */ op("PHA", Implicit, Pha),
    /* 0x49 */ op("EOR", Immediate, Eor),
    /* 0x4A */ op("LSR", Accumulator, Lsr),
    /* 0x4B */ ILLEGAL,
    /* 0x4C */ op("JMP", Absolute, Jmp),
    /* 0x4D */ op("EOR", Absolute, Eor),
    /* 0x4E */ op("LSR", Absolute, Lsr),
    /* 0x4F */ ILLEGAL,
    /* 0x50 */ op("BVC", Relative, Bvc),
    /* 0x51 */ op("EOR", IndirectY, Eor),
    /* 0x52 */ op("JAM", Implicit, Jam),
    /* 0x53 */ ILLEGAL,
    /* 0x54 */ ILLEGAL,
    /* 0x55 */ op("EOR", ZeroPageX, Eor),
    /* 0x56 */ op("LSR", ZeroPageX, Lsr),
    /* 0x57 */ ILLEGAL,
    /* 0x58 */ op("CLI", Implicit, Cli),
    /* 0x59 */ op("EOR", AbsoluteY, Eor),
    /* 0x5A */ ILLEGAL,
    /* 0x5B */ ILLEGAL,
    /* 0x5C */ ILLEGAL,
    /* 0x5D */ op("EOR", AbsoluteX, Eor),
    /* 0x5E */ op("LSR", AbsoluteX, Lsr),
    /* 0x5F */ ILLEGAL,
    /* 0x60 */ op("RTS", Implicit, Rts),
    /* 0x61 */ documented("ADC", IndirectX),
    /* 0x62 */ op("JAM", Implicit, Jam),
    /* 0x63 */ ILLEGAL,
    /* 0x64 */ ILLEGAL,
    /* 0x65 */ documented("ADC", ZeroPage),
    /* 0x66 */ op("ROR", ZeroPage, Ror),
    /* 0x67 */ ILLEGAL,
    /* 0x68 */ op("PLA", Implicit, Pla),
    /* 0x69 */ documented("ADC", Immediate),
    /* 0x6A */ op("ROR", Accumulator, Ror),
    /* 0x6B */ ILLEGAL,
    /* 0x6C */ op("JMP", Indirect, Jmp),
    /* 0x6D */ documented("ADC", Absolute),
    /* 0x6E */ op("ROR", Absolute, Ror),
    /* 0x6F */ ILLEGAL,
    /* 0x70 */ op("BVS", Relative, Bvs),
    /* 0x71 */ documented("ADC", IndirectY),
    /* 0x72 */ op("JAM", Implicit, Jam),
    /* 0x73 */ ILLEGAL,
    /* 0x74 */ ILLEGAL,
    /* 0x75 */ documented("ADC", ZeroPageX),
    /* 0x76 */ op("ROR", ZeroPageX, Ror),
    /* 0x77 */ ILLEGAL,
    /* 0x78 */ op("SEI", Implicit, Sei),
    /* 0x79 */ documented("ADC", AbsoluteY),
    /* 0x7A */ ILLEGAL,
    /* 0x7B */ ILLEGAL,
    /* 0x7C */ ILLEGAL,
    /* 0x7D */ documented("ADC", AbsoluteX),
    /* 0x7E */ op("ROR", AbsoluteX, Ror),
    /* 0x7F */ ILLEGAL,
    /* 0x80 */ ILLEGAL,
    /* 0x81 */ op("STA", IndirectX, Sta),
    /* 0x82 */ ILLEGAL,
    /* 0x83 */ ILLEGAL,
    /* 0x84 */ op("STY", ZeroPage, Sty),
    /* 0x85 */ op("STA", ZeroPage, Sta),
    /* 0x86 */ op("STX", ZeroPage, Stx),
    /* 0x87 */ ILLEGAL,
    /* 0x88 */ op("DEY", Implicit, Dey),
    /* 0x89 */ ILLEGAL,
    /* 0x8A */ op("TXA", Implicit, Txa),
    /* 0x8B */ ILLEGAL,
    /* 0x8C */ op("STY", Absolute, Sty),
    /* 0x8D */ op("STA", Absolute, Sta),
    /* 0x8E */ op("STX", Absolute, Stx),
    /* 0x8F */ ILLEGAL,
    /* 0x90 */ op("BCC", Relative, Bcc),
    /* 0x91 */ op("STA", IndirectY, Sta),
    /* 0x92 */ op("JAM", Implicit, Jam),
    /* 0x93 */ ILLEGAL,
    /* 0x94 */ op("STY", ZeroPageX, Sty),
    /* 0x95 */ op("STA", ZeroPageX, Sta),
    /* 0x96 */ op("STX", ZeroPageY, Stx),
    /* 0x97 */ ILLEGAL,
    /* 0x98 */ op("TYA", Implicit, Tya),
    /* 0x99 */ op("STA", AbsoluteY, Sta),
    /* 0x9A */ op("TXS", Implicit, Txs),
    /* 0x9B */ ILLEGAL,
    /* 0x9C */ ILLEGAL,
    /* 0x9D */ op("STA", AbsoluteX, Sta),
    /* 0x9E */ ILLEGAL,
    /* 0x9F */ ILLEGAL,
    /* 0xA0 */ op("LDY", Immediate, Ldy),
    /* 0xA1 */ op("LDA", IndirectX, Lda),
    /* 0xA2 */ op("LDX", Immediate, Ldx),
    /* 0xA3 */ ILLEGAL,
    /* 0xA4 */ op("LDY", ZeroPage, Ldy),
    /* 0xA5 */ op("LDA", ZeroPage, Lda),
    /* 0xA6 */ op("LDX", ZeroPage, Ldx),
    /* 0xA7 */ ILLEGAL,
    /* 0xA8 */ op("TAY", Implicit, Tay),
    /* 0xA9 */ op("LDA", Immediate, Lda),
    /* 0xAA */ op("TAX", Implicit, Tax),
    /* 0xAB */ ILLEGAL,
    /* 0xAC */ op("LDY", Absolute, Ldy),
    /* 0xAD */ op("LDA", Absolute, Lda),
    /* 0xAE */ op("LDX", Absolute, Ldx),
    /* 0xAF */ ILLEGAL,
    /* 0xB0 */ op("BCS", Relative, Bcs),
    /* 0xB1 */ op("LDA", IndirectY, Lda),
    /* 0xB2 */ op("JAM", Implicit, Jam),
    /* 0xB3 */ ILLEGAL,
    /* 0xB4 */ op("LDY", ZeroPageX, Ldy),
    /* 0xB5 */ op("LDA", ZeroPageX, Lda),
    /* 0xB6 */ op("LDX", ZeroPageY, Ldx),
    /* 0xB7 */ ILLEGAL,
    /* 0xB8 */ op("CLV", Implicit, Clv),
    /* 0xB9 */ op("LDA", AbsoluteY, Lda),
    /* 0xBA */ op("TSX", Implicit, Tsx),
    /* 0xBB */ ILLEGAL,
    /* 0xBC */ op("LDY", AbsoluteX, Ldy),
    /* 0xBD */ op("LDA", AbsoluteX, Lda),
    /* 0xBE */ op("LDX", AbsoluteY, Ldx),
    /* 0xBF */ ILLEGAL,
    /* 0xC0 */ op("CPY", Immediate, Cpy),
    /* 0xC1 */ op("CMP", IndirectX, Cmp),
    /* 0xC2 */ ILLEGAL,
    /* 0xC3 */ ILLEGAL,
    /* 0xC4 */ op("CPY", ZeroPage, Cpy),
    /* 0xC5 */ op("CMP", ZeroPage, Cmp),
    /* 0xC6 */ documented("DEC", ZeroPage),
    /* 0xC7 */ ILLEGAL,
    /* 0xC8 */ op("INY", Implicit, Iny),
    /* 0xC9 */ op("CMP", Immediate, Cmp),
    /* 0xCA */ op("DEX", Implicit, Dex),
    /* 0xCB */ ILLEGAL,
    /* 0xCC */ op("CPY", Absolute, Cpy),
    /* 0xCD */ op("CMP", Absolute, Cmp),
    /* 0xCE */ documented("DEC", Absolute),
    /* 0xCF */ ILLEGAL,
    /* 0xD0 */ op("BNE", Relative, Bne),
    /* 0xD1 */ op("CMP", IndirectY, Cmp),
    /* 0xD2 */ op("JAM", Implicit, Jam),
    /* 0xD3 */ ILLEGAL,
    /* 0xD4 */ ILLEGAL,
    /* 0xD5 */ op("CMP", ZeroPageX, Cmp),
    /* 0xD6 */ documented("DEC", ZeroPageX),
    /* 0xD7 */ ILLEGAL,
    /* 0xD8 */ op("CLD", Implicit, Cld),
    /* 0xD9 */ op("CMP", AbsoluteY, Cmp),
    /* 0xDA */ ILLEGAL,
    /* 0xDB */ ILLEGAL,
    /* 0xDC */ ILLEGAL,
    /* 0xDD */ op("CMP", AbsoluteX, Cmp),
    /* 0xDE */ documented("DEC", AbsoluteX),
    /* 0xDF */ ILLEGAL,
    /* 0xE0 */ op("CPX", Immediate, Cpx),
    /* 0xE1 */ documented("SBC", IndirectX),
    /* 0xE2 */ ILLEGAL,
    /* 0xE3 */ ILLEGAL,
    /* 0xE4 */ op("CPX", ZeroPage, Cpx),
    /* 0xE5 */ documented("SBC", ZeroPage),
    /* 0xE6 */ documented("INC", ZeroPage),
    /* 0xE7 */ ILLEGAL,
    /* 0xE8 */ op("INX", Implicit, Inx),
    /* 0xE9 */ documented("SBC", Immediate),
    /* 0xEA */ op("NOP", Implicit, Nop),
    /* 0xEB */ ILLEGAL,
    /* 0xEC */ op("CPX", Absolute, Cpx),
    /* 0xED */ documented("SBC", Absolute),
    /* 0xEE */ documented("INC", Absolute),
    /* 0xEF */ ILLEGAL,
    /* 0xF0 */ op("BEQ", Relative, Beq),
    /* 0xF1 */ documented("SBC", IndirectY),
    /* 0xF2 */ op("JAM", Implicit, Jam),
    /* 0xF3 */ ILLEGAL,
    /* 0xF4 */ ILLEGAL,
    /* 0xF5 */ documented("SBC", ZeroPageX),
    /* 0xF6 */ documented("INC", ZeroPageX),
    /* 0xF7 */ ILLEGAL,
    /* 0xF8 */ op("SED", Implicit, Sed),
    /* 0xF9 */ documented("SBC", AbsoluteY),
    /* 0xFA */ ILLEGAL,
    /* 0xFB */ ILLEGAL,
    /* 0xFC */ ILLEGAL,
    /* 0xFD */ documented("SBC", AbsoluteX),
    /* 0xFE */ documented("INC", AbsoluteX),
    /* 0xFF */ ILLEGAL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_matches_addressing_mode() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(
                metadata.size_bytes,
                1 + metadata.addressing_mode.operand_bytes(),
                "Opcode 0x{:02X} size disagrees with its addressing mode",
                opcode
            );
        }
    }

    #[test]
    fn test_operation_matches_mnemonic() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            if let Some(operation) = metadata.operation {
                assert_eq!(
                    format!("{:?}", operation).to_uppercase(),
                    metadata.mnemonic,
                    "Opcode 0x{:02X} dispatches to the wrong operation",
                    opcode
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(0x4C).mnemonic, "JMP");
        assert_eq!(lookup(0x6C).addressing_mode, AddressingMode::Indirect);
        assert_eq!(lookup(0x02).operation, None);
    }
}
