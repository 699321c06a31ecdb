//! Bit-Field Descriptors and Accessors
//!
//! A register is described as an ordered list of [`BitField`]s, each
//! covering a single bit or an inclusive bit range of the 16-bit word.
//! The accessors here are the only code in the crate that touches field
//! bits, and they uphold one invariant: *no bits outside the addressed
//! field are ever affected*.

use bitflags::bitflags;

bitflags! {
    /// Access-type tags attached to every catalog field.
    ///
    /// The datasheet combines these freely ("RO, LH", "R/W, SC",
    /// "RWS to 0x3"), so they are flags rather than an enum. The common
    /// combinations are provided as constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Access: u16 {
        /// Read-only
        const RO = 1 << 0;
        /// Read-write
        const RW = 1 << 1;
        /// Self-clearing after the operation it triggers completes
        const SC = 1 << 2;
        /// Latching high: stays set until read
        const LH = 1 << 3;
        /// Latching low: stays clear until read
        const LL = 1 << 4;
        /// Reserved; write as zero unless noted otherwise
        const RES = 1 << 5;
        /// Retains its value across soft resets
        const RETAIN = 1 << 6;
        /// Takes effect on the next link update / renegotiation
        const UPDATE = 1 << 7;
        /// Resets to a documented non-zero default ("RWS" in the datasheet)
        const SET_DEFAULT = 1 << 8;
        /// Cleared by reading ("ROC" in the datasheet)
        const CLEAR_ON_READ = 1 << 9;
    }
}

// bitflags generates an opaque wrapper the Format derive cannot see
// through, so the impl is written out.
#[cfg(feature = "defmt")]
impl defmt::Format for Access {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Access({=u16:#06x})", self.bits());
    }
}

impl Access {
    /// Read-write, retained across soft reset ("RWR")
    pub const RWR: Access = Access::RW.union(Access::RETAIN);
    /// Read-write with a non-zero power-on default ("RWS")
    pub const RWS: Access = Access::RW.union(Access::SET_DEFAULT);
    /// Read-only, latching high
    pub const RO_LH: Access = Access::RO.union(Access::LH);
    /// Read-only, latching low
    pub const RO_LL: Access = Access::RO.union(Access::LL);
    /// Read-only, cleared when read
    pub const ROC: Access = Access::RO.union(Access::CLEAR_ON_READ);
    /// Read-write, self-clearing
    pub const RW_SC: Access = Access::RW.union(Access::SC);
    /// Read-write, applied at the next update event
    pub const RW_UPDATE: Access = Access::RW.union(Access::UPDATE);

    /// Whether the field accepts writes at all
    pub const fn is_writable(self) -> bool {
        self.contains(Access::RW) || self.contains(Access::SC)
    }
}

// =============================================================================
// Field Span
// =============================================================================

/// Location of a field inside a 16-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldSpan {
    /// A single bit position (0–15)
    Bit(u8),
    /// An inclusive bit range, `high >= low`, both 0–15
    Range {
        /// Most significant bit of the range
        high: u8,
        /// Least significant bit of the range
        low: u8,
    },
}

impl FieldSpan {
    /// Least significant bit covered by the span
    pub const fn low(self) -> u8 {
        match self {
            FieldSpan::Bit(b) => b,
            FieldSpan::Range { low, .. } => low,
        }
    }

    /// Most significant bit covered by the span
    pub const fn high(self) -> u8 {
        match self {
            FieldSpan::Bit(b) => b,
            FieldSpan::Range { high, .. } => high,
        }
    }

    /// Number of bits covered
    pub const fn width(self) -> u8 {
        self.high() - self.low() + 1
    }

    /// Mask of the span in register position
    pub const fn mask(self) -> u16 {
        // `(1 << 16) - 1` overflows u16, route through u32
        (((1u32 << self.width()) - 1) as u16) << self.low()
    }
}

impl core::fmt::Display for FieldSpan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            FieldSpan::Bit(b) => write!(f, "{b}"),
            FieldSpan::Range { high, low } => write!(f, "{high}:{low}"),
        }
    }
}

// =============================================================================
// Bit Field
// =============================================================================

/// One named field of a register, as listed in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Bits the field occupies
    pub span: FieldSpan,
    /// Datasheet field name
    pub name: &'static str,
    /// Access-type tags
    pub access: Access,
    /// Human description of the field's semantics
    pub desc: &'static str,
}

impl BitField {
    /// Describe a single-bit field
    pub const fn bit(pos: u8, name: &'static str, access: Access, desc: &'static str) -> Self {
        Self { span: FieldSpan::Bit(pos), name, access, desc }
    }

    /// Describe a multi-bit field covering `high..=low`
    pub const fn bits(
        high: u8,
        low: u8,
        name: &'static str,
        access: Access,
        desc: &'static str,
    ) -> Self {
        Self { span: FieldSpan::Range { high, low }, name, access, desc }
    }

    /// Mask of the field in register position
    pub const fn mask(&self) -> u16 {
        self.span.mask()
    }

    /// Extract the field's value from a register word.
    ///
    /// Single-bit fields yield 0 or 1; ranges yield the right-aligned
    /// field value.
    pub const fn get(&self, value: u16) -> u16 {
        (value >> self.span.low()) & (self.mask() >> self.span.low())
    }

    /// Replace the field's value inside a register word.
    ///
    /// `field_value` is truncated to the field width before insertion;
    /// an over-wide value silently loses its high bits rather than
    /// erroring, keeping interactive editing forgiving. Bits outside the
    /// field are returned untouched.
    pub const fn set(&self, value: u16, field_value: u16) -> u16 {
        let low = self.span.low();
        (value & !self.mask()) | ((field_value << low) & self.mask())
    }
}

/// Flip a single bit of a register word (checkbox toggle semantics).
///
/// Positions above 15 are ignored and return the word unchanged.
pub const fn toggle_bit(value: u16, bit: u8) -> u16 {
    if bit > 15 { value } else { value ^ (1 << bit) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: BitField =
        BitField::bits(9, 8, "Speed", Access::RO, "00=10M, 01=100M, 10=1000M");
    const LINK: BitField = BitField::bit(11, "Link", Access::RO, "link status");
    const FULL: BitField = BitField::bits(15, 0, "Data", Access::RWR, "whole word");

    #[test]
    fn span_geometry() {
        assert_eq!(SPEED.span.width(), 2);
        assert_eq!(SPEED.mask(), 0x0300);
        assert_eq!(LINK.mask(), 0x0800);
        assert_eq!(FULL.span.width(), 16);
        assert_eq!(FULL.mask(), 0xFFFF);
    }

    #[test]
    fn get_extracts_right_aligned() {
        assert_eq!(SPEED.get(0x0200), 0b10);
        assert_eq!(SPEED.get(0xFCFF), 0b00);
        assert_eq!(LINK.get(0x0800), 1);
        assert_eq!(LINK.get(0xF7FF), 0);
        assert_eq!(FULL.get(0xBEEF), 0xBEEF);
    }

    #[test]
    fn set_preserves_other_bits() {
        let v = 0xA5A5;
        let out = SPEED.set(v, 0b11);
        assert_eq!(out & !SPEED.mask(), v & !SPEED.mask());
        assert_eq!(SPEED.get(out), 0b11);
    }

    #[test]
    fn set_truncates_over_wide_values() {
        // deliberate leniency: 0xFF into a 2-bit field keeps only 0b11
        assert_eq!(SPEED.get(SPEED.set(0, 0xFF)), 0b11);
        assert_eq!(LINK.get(LINK.set(0, 2)), 0); // bit 1 of 2 is 0
        assert_eq!(LINK.get(LINK.set(0, 3)), 1);
    }

    #[test]
    fn set_then_get_round_trip() {
        for x in 0..=0xFu16 {
            for v in [0u16, 0xFFFF, 0x5555] {
                assert_eq!(SPEED.get(SPEED.set(v, x)), x & 0b11);
            }
        }
    }

    #[test]
    fn get_then_set_is_identity() {
        for v in [0u16, 0xFFFF, 0x1234, 0x8001] {
            assert_eq!(SPEED.set(v, SPEED.get(v)), v);
            assert_eq!(LINK.set(v, LINK.get(v)), v);
            assert_eq!(FULL.set(v, FULL.get(v)), v);
        }
    }

    #[test]
    fn toggle_flips_exactly_one_bit() {
        assert_eq!(toggle_bit(0, 0), 1);
        assert_eq!(toggle_bit(0xFFFF, 15), 0x7FFF);
        assert_eq!(toggle_bit(toggle_bit(0x1234, 7), 7), 0x1234);
        assert_eq!(toggle_bit(0x1234, 16), 0x1234); // out of range: no-op
    }

    #[test]
    fn access_combinations() {
        assert!(Access::RWR.contains(Access::RW));
        assert!(Access::RWR.contains(Access::RETAIN));
        assert!(Access::RO_LH.contains(Access::LH));
        assert!(!Access::RO.is_writable());
        assert!(Access::RWS.is_writable());
        assert!(Access::SC.is_writable());
    }
}
