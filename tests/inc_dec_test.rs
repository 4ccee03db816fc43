//! Tests for the register increment and decrement instructions.

use cpu6510::CPU;

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_inx_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[0xE8]);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_iny_into_negative() {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[0xC8]);
    cpu.set_y(0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_wraps_to_ff() {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[0xCA]);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[0x88]);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_register_counters_leave_carry_alone() {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[0xE8, 0xCA]);
    cpu.set_flag_c(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert_eq!(cpu.x(), 0x00);
}
