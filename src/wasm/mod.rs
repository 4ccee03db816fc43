//! WebAssembly bindings for the cpu6510 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6510 CPU core,
//! enabling browser-based execution and inspection of machine code.

pub mod api;

pub use api::{DisassemblyLine, Emulator6510, EmulatorError};
