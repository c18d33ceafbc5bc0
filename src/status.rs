//! # Processor Status Register
//!
//! The 6502 packs its seven condition and control flags into a single byte,
//! the P register. This module models P as a bitset so the CPU can set, clear
//! and test individual flags while pushes and pops still see the exact byte
//! layout the hardware defines.

use bitflags::bitflags;

bitflags! {
    /// The P register, bit 7 down to bit 0: `N V 1 B D I Z C`.
    ///
    /// Bit 5 has no flag behind it on the NMOS 6502; it reads back as 1
    /// whenever P becomes observable (after reset, after `PLP`/`RTI`, and in
    /// the byte pushed by `PHP`/`BRK`). The B bit only ever exists in pushed
    /// copies of P, distinguishing `BRK`/`PHP` pushes from hardware
    /// interrupt pushes.
    ///
    /// # Examples
    ///
    /// ```
    /// use r6502::Status;
    ///
    /// let p = Status::UNUSED | Status::INTERRUPT;
    /// assert_eq!(p.bits(), 0x24); // the value reset establishes
    /// assert!(!p.contains(Status::CARRY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u8 {
        /// Negative: bit 7 of the last computed value.
        const NEGATIVE = 0x80;
        /// Overflow: signed overflow out of ADC/SBC, or bit 6 via BIT.
        const OVERFLOW = 0x40;
        /// Hardwired to 1 in every externally observable copy of P.
        const UNUSED = 0x20;
        /// Break marker, meaningful only in pushed copies of P.
        const BREAK = 0x10;
        /// Decimal mode: ADC/SBC operate on BCD nibbles while set.
        const DECIMAL = 0x08;
        /// Interrupt disable.
        const INTERRUPT = 0x04;
        /// Zero: the last computed value was 0x00.
        const ZERO = 0x02;
        /// Carry out of additions, shifts and comparisons.
        const CARRY = 0x01;
    }
}

impl Status {
    /// Updates Z and N from a freshly computed register or memory value.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, (value & 0x80) != 0);
    }

    /// The byte image `PHP` and `BRK` push: B and the unused bit forced to 1.
    pub(crate) fn pushed(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// Rebuilds P from a byte popped off the stack (`PLP`, `RTI`). The
    /// unused bit reads back as 1 no matter what was stored.
    pub(crate) fn from_pushed(byte: u8) -> Status {
        Status::from_bits_retain(byte) | Status::UNUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zn_tracks_value() {
        let mut p = Status::empty();
        p.set_zn(0x00);
        assert!(p.contains(Status::ZERO));
        assert!(!p.contains(Status::NEGATIVE));

        p.set_zn(0x80);
        assert!(!p.contains(Status::ZERO));
        assert!(p.contains(Status::NEGATIVE));

        p.set_zn(0x7F);
        assert!(!p.contains(Status::ZERO));
        assert!(!p.contains(Status::NEGATIVE));
    }

    #[test]
    fn pushed_forces_break_and_unused() {
        let p = Status::CARRY | Status::ZERO;
        assert_eq!(p.pushed(), 0x33);
    }

    #[test]
    fn popped_forces_unused() {
        let p = Status::from_pushed(0x00);
        assert_eq!(p.bits(), 0x20);

        // Every stored bit survives the round trip.
        let p = Status::from_pushed(0xFF);
        assert_eq!(p.bits(), 0xFF);
    }
}
