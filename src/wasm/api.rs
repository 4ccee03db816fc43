//! WASM API for the 6510 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! and disassembly of memory.

use log::debug;
use wasm_bindgen::prelude::*;

use crate::{disassemble, format_instruction, DisassemblyOptions, ExecutionError, CPU};

/// Longest encoding of any instruction, in bytes.
const MAX_INSTRUCTION_BYTES: usize = 3;

/// Most instructions a single disassembly request can cover: enough to walk
/// all of memory one byte at a time.
const MAX_DISASSEMBLY_LINES: usize = 0x10000;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct EmulatorError {
    message: String,
}

#[wasm_bindgen]
impl EmulatorError {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for EmulatorError {
    fn from(err: ExecutionError) -> Self {
        EmulatorError {
            message: err.to_string(),
        }
    }
}

/// One disassembled instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Assembly text, e.g. `LDA #$10`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6510 {
    cpu: CPU,
}

#[wasm_bindgen]
impl Emulator6510 {
    /// Create an emulator with zero-filled memory and the CPU in its
    /// initial state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6510 { cpu: CPU::new() }
    }

    /// Copy a program into memory and point PC at it
    pub fn load(&mut self, program: &[u8], start_addr: u16) {
        debug!("loading {} bytes at ${:04X}", program.len(), start_addr);

        self.cpu.load(start_addr, program);
        self.cpu.set_pc(start_addr);
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), EmulatorError> {
        self.cpu.step().map_err(EmulatorError::from)
    }

    /// Execute up to `max_steps` instructions and return how many ran
    pub fn run_for_steps(&mut self, max_steps: u32) -> Result<u32, EmulatorError> {
        self.cpu
            .run_for_steps(max_steps as u64)
            .map(|steps| steps as u32)
            .map_err(EmulatorError::from)
    }

    /// Reset registers and flags; memory is kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn jammed(&self) -> bool {
        self.cpu.is_jammed()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read_byte(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write_byte(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256u16).map(|i| self.cpu.read_byte(start | i)).collect()
    }

    /// Disassemble `num_instructions` instructions starting at `start_addr`
    ///
    /// Returns an array of `DisassemblyLine`. Reading wraps past $FFFF.
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> js_sys::Array {
        let count = disassembly_line_count(num_instructions);
        let window: Vec<u8> = (0..count * MAX_INSTRUCTION_BYTES)
            .map(|i| self.cpu.read_byte(start_addr.wrapping_add(i as u16)))
            .collect();

        let opts = DisassemblyOptions {
            start_address: start_addr,
            hex_dump: false,
        };

        disassemble(&window, opts)
            .iter()
            .take(count)
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: instr.bytes(),
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}

/// Clamps a requested line count so the byte window stays bounded.
fn disassembly_line_count(requested: u32) -> usize {
    (requested as usize).min(MAX_DISASSEMBLY_LINES)
}

impl Default for Emulator6510 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassembly_line_count_is_clamped() {
        assert_eq!(disassembly_line_count(0), 0);
        assert_eq!(disassembly_line_count(16), 16);
        assert_eq!(disassembly_line_count(u32::MAX), MAX_DISASSEMBLY_LINES);
        assert!(MAX_DISASSEMBLY_LINES
            .checked_mul(MAX_INSTRUCTION_BYTES)
            .is_some());
    }
}
