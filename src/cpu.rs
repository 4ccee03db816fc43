//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6510 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: see [`StatusRegister`]
//! - **Jam flag**: set by the JAM opcode, freezes the CPU until [`CPU::reset`]
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until the CPU jams or an opcode faults
//! - `run_until_break()`: Like `run()`, but also stops after a BRK
//! - `run_for_steps()`: Execute at most a given number of instructions
//!
//! Each instruction handler consumes its own opcode and operand bytes, so the
//! loop never advances PC itself. An opcode the table cannot execute fails
//! with [`ExecutionError::UnknownOpcode`] before any state is modified.

use log::{debug, trace, warn};

use crate::{instructions, lookup, ExecutionError, FlatMemory, MemoryBus, Operation, StatusRegister};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after construction or reset.
pub const INITIAL_SP: u8 = 0xFF;

/// Execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// The CPU will fetch and execute the byte at PC on the next step.
    Running,

    /// The CPU executed a JAM opcode and will not advance until reset.
    Jammed,
}

/// 6510 CPU state and execution context.
///
/// The CPU owns its memory bus exclusively. It is generic over the bus so a
/// host can substitute memory-mapped behavior, and defaults to [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use cpu6510::CPU;
///
/// let cpu = CPU::new();
///
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x20); // only the unused bit
/// assert!(!cpu.is_jammed());
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: StatusRegister,

    /// Set by JAM, cleared only by reset
    pub(crate) jammed: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU in the canonical initial state with zero-filled memory.
    ///
    /// PC is 0, SP is 0xFF, A/X/Y are 0 and every flag except the unused
    /// bit is clear.
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the canonical initial state on top of `memory`.
    ///
    /// The memory contents are used as-is.
    pub fn with_memory(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: INITIAL_SP,
            status: StatusRegister::default(),
            jammed: false,
            memory,
        }
    }

    /// Restores the canonical register and flag state and clears the jam.
    ///
    /// Memory is left untouched so a loaded program can be run again.
    pub fn reset(&mut self) {
        debug!("CPU reset (was {:?})", self.state());

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = 0x0000;
        self.sp = INITIAL_SP;
        self.status = StatusRegister::default();
        self.jammed = false;
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up the opcode in the opcode table
    /// 3. Fail with `UnknownOpcode` if the entry has no operation
    /// 4. Dispatch to the instruction handler, which advances PC
    ///
    /// Stepping a jammed CPU does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6510::{CPU, ExecutionError};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load(0x0000, &[0xEA, 0x02]); // NOP, unmapped
    ///
    /// assert!(cpu.step().is_ok());
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0x0001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.jammed {
            return Ok(());
        }

        let address = self.pc;
        let opcode = self.memory.read(address);
        let metadata = lookup(opcode);

        let Some(operation) = metadata.operation else {
            warn!("unknown opcode ${:02X} at ${:04X}", opcode, address);
            return Err(ExecutionError::UnknownOpcode { opcode, address });
        };

        trace!("${:04X}: {:02X} {}", address, opcode, metadata.mnemonic);

        instructions::execute(self, operation, opcode)?;

        if self.jammed {
            debug!("CPU jammed by ${:02X} at ${:04X}", opcode, address);
        }

        Ok(())
    }

    /// Runs until the CPU jams or an instruction faults.
    ///
    /// A program that neither jams nor faults runs forever; use
    /// [`run_for_steps`](Self::run_for_steps) to bound it.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while !self.jammed {
            self.step()?;
        }

        Ok(())
    }

    /// Runs until a BRK has executed, the CPU jams, or an instruction faults.
    pub fn run_until_break(&mut self) -> Result<(), ExecutionError> {
        while !self.jammed {
            let operation = lookup(self.memory.read(self.pc)).operation;
            self.step()?;

            if operation == Some(Operation::Brk) {
                break;
            }
        }

        Ok(())
    }

    /// Executes at most `max_steps` instructions.
    ///
    /// Stops early when the CPU jams. Returns the number of instructions
    /// executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6510::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load(0x0000, &[0xEA, 0xEA, 0x12]); // NOP, NOP, JAM
    ///
    /// assert_eq!(cpu.run_for_steps(10), Ok(3));
    /// assert!(cpu.is_jammed());
    /// ```
    pub fn run_for_steps(&mut self, max_steps: u64) -> Result<u64, ExecutionError> {
        let mut executed = 0;

        while executed < max_steps && !self.jammed {
            self.step()?;
            executed += 1;
        }

        Ok(executed)
    }

    // ========== Memory Access ==========

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.memory.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Reads a byte through the memory bus.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte through the memory bus.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Stack ==========

    /// Writes `value` at 0x0100 + SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads from 0x0100 + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 set).
    pub fn status(&self) -> u8 {
        self.status.to_byte()
    }

    /// Returns the status flags.
    pub fn status_register(&self) -> StatusRegister {
        self.status
    }

    /// Returns true once a JAM opcode has executed.
    pub fn is_jammed(&self) -> bool {
        self.jammed
    }

    /// Returns the current execution state.
    pub fn state(&self) -> ExecutionState {
        if self.jammed {
            ExecutionState::Jammed
        } else {
            ExecutionState::Running
        }
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal_mode
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry
    }

    // ========== Setters ==========
    //
    // For hosts preparing a program and for tests. Instruction handlers
    // write the fields directly.

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces all flags from a packed status byte.
    pub fn set_status(&mut self, value: u8) {
        self.status = StatusRegister::from_byte(value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.negative = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.overflow = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.break_command = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.decimal_mode = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.interrupt_disable = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.zero = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.carry = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new();

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.state(), ExecutionState::Running);

        assert!(!cpu.flag_i());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_memory_zero_filled() {
        let cpu = CPU::new();

        assert!((0..=0xFFFFu16).all(|addr| cpu.read_byte(addr) == 0));
    }

    #[test]
    fn test_push_pull_wrap_stack_pointer() {
        let mut cpu = CPU::new();
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.read_byte(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_unknown_opcode_leaves_state_untouched() {
        let mut cpu = CPU::new();
        cpu.load(0x0400, &[0x02]);
        cpu.set_pc(0x0400);
        cpu.set_a(0x12);
        let before = cpu.status();

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnknownOpcode {
                opcode: 0x02,
                address: 0x0400
            })
        );
        assert_eq!(cpu.pc(), 0x0400);
        assert_eq!(cpu.a(), 0x12);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.status(), before);
    }

    #[test]
    fn test_reset_clears_jam_and_keeps_memory() {
        let mut cpu = CPU::new();
        cpu.load(0x0000, &[0xA9, 0x44, 0x12]);
        cpu.run().unwrap();
        assert!(cpu.is_jammed());

        cpu.reset();

        assert_eq!(cpu.state(), ExecutionState::Running);
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.read_byte(0x0001), 0x44);
    }
}
