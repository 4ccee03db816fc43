//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6510 processor and the
//! resolver that turns an instruction's operand bytes into an effective
//! address or an immediate value.
//!
//! Every resolver method reads the operand bytes at the current program
//! counter and advances the program counter by the operand width, so a
//! handler that first consumes its opcode byte ends up positioned at the
//! next instruction.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6510 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register, wrapping at 0xFFFF.
    AbsoluteX,

    /// 16-bit address indexed by Y register, wrapping at 0xFFFF.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read 16-bit address
    /// from that location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Returns true if the mode names a memory location.
    pub const fn has_effective_address(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implicit
                | AddressingMode::Accumulator
                | AddressingMode::Immediate
                | AddressingMode::Relative
        )
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Consumes the opcode byte of an instruction without operands.
    pub(crate) fn consume_opcode(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Consumes the opcode and operand bytes and returns the effective address.
    ///
    /// Fails without touching any state when `mode` has no effective address.
    pub(crate) fn resolve_address(
        &mut self,
        mnemonic: &'static str,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        let resolve: fn(&mut Self) -> u16 = match mode {
            AddressingMode::ZeroPage => Self::zero_page,
            AddressingMode::ZeroPageX => Self::zero_page_x,
            AddressingMode::ZeroPageY => Self::zero_page_y,
            AddressingMode::Absolute => Self::absolute,
            AddressingMode::AbsoluteX => Self::absolute_x,
            AddressingMode::AbsoluteY => Self::absolute_y,
            AddressingMode::Indirect => Self::indirect,
            AddressingMode::IndirectX => Self::indexed_indirect,
            AddressingMode::IndirectY => Self::indirect_indexed,
            other => {
                return Err(ExecutionError::InvalidAddressingMode {
                    mnemonic,
                    mode: other,
                })
            }
        };

        self.consume_opcode();
        Ok(resolve(self))
    }

    /// Consumes the opcode and operand bytes and returns the operand value.
    ///
    /// Immediate operands are returned directly, every other mode is
    /// dereferenced through [`resolve_address`](Self::resolve_address).
    pub(crate) fn resolve_operand(
        &mut self,
        mnemonic: &'static str,
        mode: AddressingMode,
    ) -> Result<u8, ExecutionError> {
        if mode == AddressingMode::Immediate {
            self.consume_opcode();
            return Ok(self.immediate());
        }

        let addr = self.resolve_address(mnemonic, mode)?;
        Ok(self.memory.read(addr))
    }

    // ========== Per-mode resolvers ==========
    //
    // Each one starts with PC on the first operand byte.

    pub(crate) fn immediate(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub(crate) fn zero_page(&mut self) -> u16 {
        self.immediate() as u16
    }

    pub(crate) fn zero_page_x(&mut self) -> u16 {
        self.immediate().wrapping_add(self.x) as u16
    }

    pub(crate) fn zero_page_y(&mut self) -> u16 {
        self.immediate().wrapping_add(self.y) as u16
    }

    pub(crate) fn absolute(&mut self) -> u16 {
        let lo = self.memory.read(self.pc);
        let hi = self.memory.read(self.pc.wrapping_add(1));
        self.pc = self.pc.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn absolute_x(&mut self) -> u16 {
        self.absolute().wrapping_add(self.x as u16)
    }

    pub(crate) fn absolute_y(&mut self) -> u16 {
        self.absolute().wrapping_add(self.y as u16)
    }

    /// Returns the target of an indirect JMP.
    ///
    /// The high byte of the target is fetched from the same page as the low
    /// byte: `JMP ($10FF)` reads $10FF and $1000.
    pub(crate) fn indirect(&mut self) -> u16 {
        let ptr = self.absolute();
        let lo = self.memory.read(ptr);
        let hi = self.memory.read((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF));
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn indexed_indirect(&mut self) -> u16 {
        let zp = self.immediate().wrapping_add(self.x);
        self.read_zero_page_pointer(zp)
    }

    pub(crate) fn indirect_indexed(&mut self) -> u16 {
        let zp = self.immediate();
        self.read_zero_page_pointer(zp).wrapping_add(self.y as u16)
    }

    /// Reads a little-endian pointer from zero page, wrapping $FF to $00.
    fn read_zero_page_pointer(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16);
        let hi = self.memory.read(zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_at(pc: u16, operands: &[u8]) -> CPU {
        let mut cpu = CPU::new();
        cpu.set_pc(pc);
        cpu.load(pc, operands);
        cpu
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::AbsoluteX.operand_bytes(), 2);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_at(0x0200, &[0xF0]);
        cpu.set_x(0x20);

        assert_eq!(cpu.zero_page_x(), 0x0010);
        assert_eq!(cpu.pc(), 0x0201);
    }

    #[test]
    fn test_absolute_y_wraps() {
        let mut cpu = cpu_at(0x0200, &[0xF0, 0xFF]);
        cpu.set_y(0x20);

        assert_eq!(cpu.absolute_y(), 0x0010);
        assert_eq!(cpu.pc(), 0x0202);
    }

    #[test]
    fn test_indexed_indirect_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_at(0x0200, &[0xFE]);
        cpu.set_x(0x01);
        cpu.write_byte(0x00FF, 0x34);
        cpu.write_byte(0x0000, 0x12);

        assert_eq!(cpu.indexed_indirect(), 0x1234);
    }

    #[test]
    fn test_indirect_indexed_adds_y_after_dereference() {
        let mut cpu = cpu_at(0x0200, &[0x40]);
        cpu.set_y(0x10);
        cpu.write_byte(0x0040, 0xF8);
        cpu.write_byte(0x0041, 0x12);

        assert_eq!(cpu.indirect_indexed(), 0x1308);
        assert_eq!(cpu.pc(), 0x0201);
    }

    #[test]
    fn test_indirect_page_wrap_quirk() {
        let mut cpu = cpu_at(0x0200, &[0xFF, 0x10]);
        cpu.write_byte(0x10FF, 0x34);
        cpu.write_byte(0x1000, 0x12);
        cpu.write_byte(0x1100, 0x56);

        assert_eq!(cpu.indirect(), 0x1234);
    }

    #[test]
    fn test_resolve_address_rejects_immediate_without_side_effects() {
        let mut cpu = cpu_at(0x0200, &[0xA9, 0x10]);

        let result = cpu.resolve_address("STA", AddressingMode::Immediate);

        assert_eq!(
            result,
            Err(ExecutionError::InvalidAddressingMode {
                mnemonic: "STA",
                mode: AddressingMode::Immediate,
            })
        );
        assert_eq!(cpu.pc(), 0x0200);
    }
}
