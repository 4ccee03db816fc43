//! Tests for CPU construction, reset and host-side memory access.

use cpu6510::{ExecutionState, FlatMemory, MemoryBus, StatusRegister, CPU};

#[test]
fn test_new_cpu_initial_state() {
    let cpu = CPU::new();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), 0x20);
    assert_eq!(cpu.status_register(), StatusRegister::default());
    assert_eq!(cpu.state(), ExecutionState::Running);
}

#[test]
fn test_with_memory_keeps_contents() {
    let mut memory = FlatMemory::new();
    memory.write(0x1234, 0x56);

    let cpu = CPU::with_memory(memory);

    assert_eq!(cpu.read_byte(0x1234), 0x56);
    assert_eq!(cpu.memory().read(0x1234), 0x56);
}

#[test]
fn test_load_and_memory_mut() {
    let mut cpu = CPU::new();

    cpu.load(0xFFFF, &[0x11, 0x22]);
    cpu.memory_mut().write(0x0300, 0x33);
    cpu.write_byte(0x0301, 0x44);

    assert_eq!(cpu.read_byte(0xFFFF), 0x11);
    assert_eq!(cpu.read_byte(0x0000), 0x22);
    assert_eq!(cpu.read_byte(0x0300), 0x33);
    assert_eq!(cpu.read_byte(0x0301), 0x44);
}

#[test]
fn test_set_status_round_trips_through_byte() {
    let mut cpu = CPU::new();

    cpu.set_status(0b1100_0011);

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_b());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.status(), 0b1110_0011);
}

#[test]
fn test_reset_restores_registers_but_not_memory() {
    let mut cpu = CPU::new();
    cpu.load(0x0200, &[0xEA]);
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_sp(0x80);
    cpu.set_pc(0x0200);
    cpu.set_status(0xFF);

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.status(), 0x20);
    assert_eq!(cpu.read_byte(0x0200), 0xEA);
}

#[test]
fn test_custom_memory_bus() {
    struct MirroredRam {
        ram: [u8; 0x800],
    }

    impl MemoryBus for MirroredRam {
        fn read(&self, addr: u16) -> u8 {
            self.ram[addr as usize & 0x7FF]
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.ram[addr as usize & 0x7FF] = value;
        }
    }

    let mut cpu = CPU::with_memory(MirroredRam { ram: [0; 0x800] });
    // LDA #$42 ; STA $0810
    cpu.load(0x0000, &[0xA9, 0x42, 0x8D, 0x10, 0x08]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.read_byte(0x0010), 0x42);
}
