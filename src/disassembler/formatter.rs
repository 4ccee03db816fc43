//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::{DisassemblyOptions, Instruction};

/// Format a single instruction as assembly text
///
/// Operands use `$` hex notation; branch operands are shown as the absolute
/// target address.
///
/// # Examples
///
/// ```
/// use cpu6510::{decode_instruction, format_instruction};
///
/// let bne = decode_instruction(&[0xD0, 0xFE], 0xC000).unwrap();
/// assert_eq!(format_instruction(&bne), "BNE $C000");
/// ```
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format a listing, one instruction per line.
///
/// Each line starts with the instruction address. With `hex_dump` set the
/// raw bytes follow in a fixed-width column:
///
/// ```text
/// C000  A9 10     LDA #$10
/// ```
pub fn format_listing(instructions: &[Instruction], options: DisassemblyOptions) -> String {
    let mut listing = String::new();

    for instr in instructions {
        let text = format_instruction(instr);

        let line = if options.hex_dump {
            let bytes: Vec<String> = instr.bytes().iter().map(|b| format!("{:02X}", b)).collect();
            format!("{:04X}  {:<8}  {}", instr.address, bytes.join(" "), text)
        } else {
            format!("{:04X}  {}", instr.address, text)
        };

        listing.push_str(line.trim_end());
        listing.push('\n');
    }

    listing
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.is_data() {
        return format!("${:02X}", instr.opcode);
    }

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => byte as u16,
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X},X", byte),
        ZeroPageY => format!("${:02X},Y", byte),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add_signed(byte as i8 as i16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X},X", word),
        AbsoluteY => format!("${:04X},Y", word),
        Indirect => format!("(${:04X})", word),
        IndirectX => format!("(${:02X},X)", byte),
        IndirectY => format!("(${:02X}),Y", byte),
    }
}
