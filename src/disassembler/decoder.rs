//! Instruction decoder for the 6510 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::lookup;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` for bytes without a mnemonic and for instructions cut short by the
/// end of the slice.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = lookup(opcode);

    if !metadata.is_mapped() {
        return None;
    }

    let operand_len = metadata.size_bytes as usize - 1;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn test_decode_lda_immediate() {
        let bytes = &[0xA9, 0x42];
        let instr = decode_instruction(bytes, 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let bytes = &[0x8D, 0x00, 0x80];
        let instr = decode_instruction(bytes, 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let instr = decode_instruction(&[0xEA, 0xA9, 0x01], 0x1000).unwrap();

        assert_eq!(instr.mnemonic, "NOP");
        assert!(instr.operand_bytes.is_empty());
        assert_eq!(instr.size_bytes, 1);
    }

    #[test]
    fn test_decode_unexecuted_documented_opcode() {
        let instr = decode_instruction(&[0x69, 0x01], 0x0000).unwrap();
        assert_eq!(instr.mnemonic, "ADC");
    }

    #[test]
    fn test_decode_rejects_unmapped_and_truncated() {
        assert_eq!(decode_instruction(&[], 0x0000), None);
        assert_eq!(decode_instruction(&[0x02], 0x0000), None);
        assert_eq!(decode_instruction(&[0x4C, 0x00], 0x0000), None);
    }
}
