//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one instruction to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use cpu6510::{ExecutionError, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    pc: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(input.pc, &input.memory.instruction_bytes);

    let mut cpu = CPU::with_memory(memory);
    cpu.set_pc(input.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let before = cpu.clone();

    match cpu.step() {
        Ok(()) => {}
        Err(ExecutionError::UnknownOpcode { opcode, address }) => {
            // A faulting step must not modify anything
            assert_eq!(opcode, input.memory.instruction_bytes[0]);
            assert_eq!(address, input.pc);
            assert_eq!(cpu.pc(), before.pc());
            assert_eq!(cpu.a(), before.a());
            assert_eq!(cpu.sp(), before.sp());
            assert_eq!(cpu.status(), before.status());
        }
        Err(err) => panic!("table entry dispatched with a bad mode: {}", err),
    }

    // Bit 5 always reads as set
    assert_eq!(cpu.status() & 0x20, 0x20);
});
