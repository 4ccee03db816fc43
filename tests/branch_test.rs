//! Tests for the conditional branch instructions.

use cpu6510::CPU;

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(0xC002);
    cpu
}

#[test]
fn test_taken_branch_forward() {
    let mut cpu = setup_cpu();
    cpu.load(0xC002, &[0xD0, 0x40]); // BNE +$40
    cpu.set_flag_z(false);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xC044);
}

/// A branch that is not taken still consumes its operand, so PC lands on
/// the byte after it ($C004), not on the operand itself ($C003).
#[test]
fn test_not_taken_branch_skips_operand() {
    let mut cpu = setup_cpu();
    cpu.load(0xC002, &[0xD0, 0x40]);
    cpu.set_flag_z(true);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xC004);
}

#[test]
fn test_taken_branch_backward() {
    let mut cpu = setup_cpu();
    cpu.load(0xC002, &[0xF0, 0xFC]); // BEQ -4
    cpu.set_flag_z(true);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_branch_to_self() {
    let mut cpu = setup_cpu();
    cpu.load(0xC002, &[0x90, 0xFE]); // BCC *

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xC002);
}

#[test]
fn test_branch_wraps_past_top_of_memory() {
    let mut cpu = CPU::new();
    cpu.set_pc(0xFFF0);
    cpu.load(0xFFF0, &[0xB0, 0x7F]); // BCS +$7F
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0071);
}

#[test]
fn test_each_branch_follows_its_flag() {
    // (opcode, flag setter, taken when flag is)
    let cases: [(u8, fn(&mut CPU, bool), bool); 8] = [
        (0x10, CPU::set_flag_n, false), // BPL
        (0x30, CPU::set_flag_n, true),  // BMI
        (0x50, CPU::set_flag_v, false), // BVC
        (0x70, CPU::set_flag_v, true),  // BVS
        (0x90, CPU::set_flag_c, false), // BCC
        (0xB0, CPU::set_flag_c, true),  // BCS
        (0xD0, CPU::set_flag_z, false), // BNE
        (0xF0, CPU::set_flag_z, true),  // BEQ
    ];

    for (opcode, set_flag, taken_when) in cases {
        for flag in [false, true] {
            let mut cpu = setup_cpu();
            cpu.load(0xC002, &[opcode, 0x10]);
            set_flag(&mut cpu, flag);
            let status = cpu.status();

            cpu.step().unwrap();

            let expected = if flag == taken_when { 0xC014 } else { 0xC004 };
            assert_eq!(cpu.pc(), expected, "opcode ${:02X} flag {}", opcode, flag);
            assert_eq!(cpu.status(), status);
        }
    }
}
