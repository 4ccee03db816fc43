//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the addressing modes calculate effective
//! addresses correctly and wrap the way the hardware does: within zero
//! page for zero-page indexing and pointers, at 0xFFFF for absolute
//! indexing, and within a page for the indirect JMP pointer.

use cpu6510::CPU;
use proptest::prelude::*;

const PROGRAM: u16 = 0x8000;

/// Helper function to create a CPU positioned at the test program
fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(PROGRAM);
    cpu
}

fn overlaps_program(addr: u16) -> bool {
    (PROGRAM..PROGRAM + 3).contains(&addr)
}

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.write_byte(zp_addr as u16, value);
        cpu.load(PROGRAM, &[0xA5, zp_addr]); // LDA $zp

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.pc(), PROGRAM + 2);
    }

    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.write_byte(base.wrapping_add(x) as u16, value);
        cpu.load(PROGRAM, &[0xB5, base]); // LDA $base,X

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Absolute,Y adds Y to the 16-bit base and wraps at 0xFFFF
    #[test]
    fn prop_absolute_y_wraps_at_top_of_memory(base in any::<u16>(), y in any::<u8>(), value in any::<u8>()) {
        let effective = base.wrapping_add(y as u16);
        prop_assume!(!overlaps_program(effective));

        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.write_byte(effective, value);
        let [lo, hi] = base.to_le_bytes();
        cpu.load(PROGRAM, &[0xB9, lo, hi]); // LDA $base,Y

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.pc(), PROGRAM + 3);
    }

    /// Property: (zp,X) adds X within zero page and reads a wrapped pointer
    #[test]
    fn prop_indexed_indirect(zp in any::<u8>(), x in any::<u8>(), target in 0x0200u16..0x8000, value in any::<u8>()) {
        let ptr = zp.wrapping_add(x);

        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let [lo, hi] = target.to_le_bytes();
        cpu.write_byte(ptr as u16, lo);
        cpu.write_byte(ptr.wrapping_add(1) as u16, hi);
        cpu.write_byte(target, value);
        cpu.load(PROGRAM, &[0xA1, zp]); // LDA ($zp,X)

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp),Y reads a wrapped pointer, then adds Y
    #[test]
    fn prop_indirect_indexed(zp in any::<u8>(), y in any::<u8>(), base in 0x0200u16..0x7F00, value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        let [lo, hi] = base.to_le_bytes();
        cpu.write_byte(zp as u16, lo);
        cpu.write_byte(zp.wrapping_add(1) as u16, hi);
        cpu.write_byte(base + y as u16, value);
        cpu.load(PROGRAM, &[0xB1, zp]); // LDA ($zp),Y

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: JMP (ptr) takes the high byte from the same page as the low byte
    #[test]
    fn prop_indirect_jmp_stays_in_pointer_page(ptr in 0x0200u16..0x7F00, target in any::<u16>()) {
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        let [lo, hi] = target.to_le_bytes();

        let mut cpu = setup_cpu();
        cpu.write_byte(ptr, lo);
        cpu.write_byte(hi_addr, hi);
        let [ptr_lo, ptr_hi] = ptr.to_le_bytes();
        cpu.load(PROGRAM, &[0x6C, ptr_lo, ptr_hi]); // JMP ($ptr)

        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), target);
    }
}
