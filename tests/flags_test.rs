//! Tests for the flag instructions (CLC, SEC, CLI, SEI, CLD, SED, CLV).

use cpu6510::CPU;

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_set_instructions() {
    let mut cpu = setup_cpu();
    // SEC ; SEI ; SED
    cpu.load(0x8000, &[0x38, 0x78, 0xF8]);

    cpu.run_for_steps(3).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_i());
    assert!(cpu.flag_d());
    assert_eq!(cpu.status(), 0b0010_1101);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_clear_instructions() {
    let mut cpu = setup_cpu();
    // CLC ; CLI ; CLD ; CLV
    cpu.load(0x8000, &[0x18, 0x58, 0xD8, 0xB8]);
    cpu.set_status(0xFF);

    cpu.run_for_steps(4).unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_i());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.status(), 0b1011_0010);
}

#[test]
fn test_flag_instructions_touch_one_flag() {
    let cases = [
        (0x18, 0b0000_0001), // CLC
        (0x38, 0b0000_0001), // SEC
        (0x58, 0b0000_0100), // CLI
        (0x78, 0b0000_0100), // SEI
        (0xD8, 0b0000_1000), // CLD
        (0xF8, 0b0000_1000), // SED
        (0xB8, 0b0100_0000), // CLV
    ];

    for (opcode, mask) in cases {
        for initial in [0x00, 0xFF] {
            let mut cpu = setup_cpu();
            cpu.load(0x8000, &[opcode]);
            cpu.set_status(initial);
            let before = cpu.status();

            cpu.step().unwrap();

            assert_eq!(cpu.status() & !mask, before & !mask, "opcode ${:02X}", opcode);
        }
    }
}
