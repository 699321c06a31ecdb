//! Word Codec
//!
//! Permissive conversion between the textual register representations used
//! in consoles and UIs and 16-bit words, plus the fixed-width hex/binary
//! renderings every emitted command line uses.
//!
//! # Radix heuristic
//!
//! Pasted values arrive with no reliable radix marker, so parsing follows
//! the same three-step rule the surrounding tooling has always used:
//!
//! 1. a `0x`/`0X` prefix forces hex;
//! 2. otherwise any hex letter `a`–`f` (either case) forces hex;
//! 3. otherwise the string is decimal.
//!
//! The heuristic must not change: saved scripts and pasted read results
//! round-trip through it.

use alloc::string::String;

/// Parse a register value from text.
///
/// Never fails: empty or unparsable input yields 0, so a partially typed
/// value in an input field is always representable. Parsing consumes the
/// longest valid prefix of digits and ignores the rest, and the result is
/// masked to 16 bits.
///
/// # Example
///
/// ```
/// use mv88e632x_mii::word::parse_word;
///
/// assert_eq!(parse_word("0x1C"), 0x1C);
/// assert_eq!(parse_word("4003"), 4003);   // no hex letter: decimal
/// assert_eq!(parse_word("4a03"), 0x4A03); // hex letter: hex
/// assert_eq!(parse_word(""), 0);
/// ```
pub fn parse_word(text: &str) -> u16 {
    let s = text.trim();
    if s.is_empty() {
        return 0;
    }

    let lower_prefixed = s.len() >= 2 && (s.starts_with("0x") || s.starts_with("0X"));
    if lower_prefixed {
        return accumulate(&s[2..], 16);
    }
    if s.chars().any(|c| c.is_ascii_hexdigit() && !c.is_ascii_digit()) {
        return accumulate(s, 16);
    }
    accumulate(s, 10)
}

/// Fold the leading valid digits into a word, masking as we go.
fn accumulate(digits: &str, radix: u32) -> u16 {
    let mut value: u32 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        value = (value.wrapping_mul(radix).wrapping_add(d)) & 0xFFFF;
    }
    if seen { value as u16 } else { 0 }
}

/// Render `value` as uppercase hex, zero-padded to `width` nibbles.
///
/// ```
/// use mv88e632x_mii::word::format_hex;
///
/// assert_eq!(format_hex(0x1C, 2), "1C");
/// assert_eq!(format_hex(0x3, 4), "0003");
/// ```
pub fn format_hex(value: u16, width: usize) -> String {
    alloc::format!("{value:0width$X}")
}

/// Render `value` as a zero-padded binary string of `width` digits.
pub fn format_binary(value: u16, width: usize) -> String {
    alloc::format!("{value:0width$b}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn parse_hex_prefixed() {
        assert_eq!(parse_word("0x0000"), 0);
        assert_eq!(parse_word("0xFFFF"), 0xFFFF);
        assert_eq!(parse_word("0X9c00"), 0x9C00);
        assert_eq!(parse_word("  0x14 "), 0x14);
    }

    #[test]
    fn parse_bare_hex_when_letters_present() {
        assert_eq!(parse_word("1c"), 0x1C);
        assert_eq!(parse_word("DEAD"), 0xDEAD);
        assert_eq!(parse_word("f"), 0xF);
    }

    #[test]
    fn parse_decimal_otherwise() {
        assert_eq!(parse_word("0"), 0);
        assert_eq!(parse_word("31"), 31);
        assert_eq!(parse_word("65535"), 0xFFFF);
        // digits-only strings are decimal even when they look like hex
        assert_eq!(parse_word("100"), 100);
    }

    #[test]
    fn parse_is_permissive() {
        assert_eq!(parse_word(""), 0);
        assert_eq!(parse_word("   "), 0);
        assert_eq!(parse_word("zzz"), 0);
        assert_eq!(parse_word("0x"), 0);
        // longest valid prefix wins, trailing junk is ignored
        assert_eq!(parse_word("12 34"), 12);
        assert_eq!(parse_word("0x1Cq"), 0x1C);
    }

    #[test]
    fn parse_masks_to_16_bits() {
        assert_eq!(parse_word("0x12345"), 0x2345);
        assert_eq!(parse_word("65536"), 0);
        assert_eq!(parse_word("65537"), 1);
    }

    #[test]
    fn format_hex_is_uppercase_and_padded() {
        assert_eq!(format_hex(0, 4), "0000");
        assert_eq!(format_hex(0xABCD, 4), "ABCD");
        assert_eq!(format_hex(0x4, 2), "04");
        assert_eq!(format_hex(0x1FF, 2), "1FF"); // width is a minimum
    }

    #[test]
    fn format_binary_is_padded() {
        assert_eq!(format_binary(0, 16), "0000000000000000");
        assert_eq!(format_binary(0x8001, 16), "1000000000000001");
        assert_eq!(format_binary(0b101, 4), "0101");
    }

    #[test]
    fn hex_round_trip_is_lossless() {
        // only the 0x-prefixed rendering round-trips: a letterless hex
        // string like "8000" is decimal under the radix heuristic
        assert_eq!(parse_word(&format_hex(0x8000, 4)), 8000);
        // exhaustive, the domain is small
        for v in 0..=u16::MAX {
            assert_eq!(parse_word(&format!("0x{}", format_hex(v, 4))), v);
        }
    }
}
