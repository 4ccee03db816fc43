//! # Status Register
//!
//! The processor status register holds eight condition flags. It is stored as
//! individual booleans and packed into a byte only when it crosses the stack
//! (PHP/PLP) or a caller asks for it.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

const CARRY: u8 = 0b0000_0001;
const ZERO: u8 = 0b0000_0010;
const INTERRUPT_DISABLE: u8 = 0b0000_0100;
const DECIMAL: u8 = 0b0000_1000;
const BREAK: u8 = 0b0001_0000;
const UNUSED: u8 = 0b0010_0000;
const OVERFLOW: u8 = 0b0100_0000;
const NEGATIVE: u8 = 0b1000_0000;

/// The eight status flags of the 6510.
///
/// The unused bit has no field: it reads as set in every encoding.
///
/// # Examples
///
/// ```
/// use cpu6510::StatusRegister;
///
/// let status = StatusRegister::from_byte(0b1000_0001);
/// assert!(status.negative);
/// assert!(status.carry);
/// assert_eq!(status.to_byte(), 0b1010_0001); // bit 5 forced on
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusRegister {
    /// Set when the last operation carried out of bit 7 or did not borrow.
    pub carry: bool,

    /// Set when the last result was zero.
    pub zero: bool,

    /// Masks IRQ when set.
    pub interrupt_disable: bool,

    /// Decimal arithmetic mode.
    pub decimal_mode: bool,

    /// Set by BRK.
    pub break_command: bool,

    /// Set on signed overflow, or from bit 6 of the operand by BIT.
    pub overflow: bool,

    /// Set when bit 7 of the last result was set.
    pub negative: bool,
}

impl StatusRegister {
    /// Decodes a status byte. Bit 5 is ignored since it always reads as 1.
    pub const fn from_byte(value: u8) -> Self {
        Self {
            carry: value & CARRY != 0,
            zero: value & ZERO != 0,
            interrupt_disable: value & INTERRUPT_DISABLE != 0,
            decimal_mode: value & DECIMAL != 0,
            break_command: value & BREAK != 0,
            overflow: value & OVERFLOW != 0,
            negative: value & NEGATIVE != 0,
        }
    }

    /// Encodes the flags into a status byte with bit 5 set.
    pub const fn to_byte(&self) -> u8 {
        let mut status = UNUSED;

        if self.carry {
            status |= CARRY;
        }
        if self.zero {
            status |= ZERO;
        }
        if self.interrupt_disable {
            status |= INTERRUPT_DISABLE;
        }
        if self.decimal_mode {
            status |= DECIMAL;
        }
        if self.break_command {
            status |= BREAK;
        }
        if self.overflow {
            status |= OVERFLOW;
        }
        if self.negative {
            status |= NEGATIVE;
        }

        status
    }

    /// The unused flag. Always reads as set.
    pub const fn unused(&self) -> bool {
        true
    }

    /// Overwrites the zero and negative flags from an 8-bit result.
    ///
    /// Both flags are always written, so a clear result clears a flag left
    /// over from an earlier instruction.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & NEGATIVE != 0;
    }
}

impl From<u8> for StatusRegister {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<StatusRegister> for u8 {
    fn from(status: StatusRegister) -> Self {
        status.to_byte()
    }
}
