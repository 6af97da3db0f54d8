//! Numeric and time formatters
//!
//! Pure functions that render values into the ASCII bytes a layer stores.
//! They never fail: a value that does not fit its field renders as a run of
//! `'-'`, and an invalid nibble count renders as [`HEX_ERROR`].

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest decimal field (enough for any `u32`)
pub const MAX_DEC_FIELD: usize = 10;

/// Most nibbles a hex word can show
pub const MAX_NIBBLES: u8 = 8;

/// Rendered instead of hex digits when the nibble count is invalid
pub const HEX_ERROR: &[u8] = b"HexNibError";

/// Width of the `HH:MM:SS` time field
pub const TIME_WIDTH: usize = 8;

/// Character used to fill a decimal field the value does not fit in
pub const OVERFLOW_FILL: u8 = b'-';

/// Padding rule for decimal fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecMode {
    /// Pad with `'0'` on the left: `00123`
    LeadingZeros,
    /// Pad with spaces on the left: `  123`
    AlignRight,
    /// Pad with spaces on the right: `123  `
    AlignLeft,
}

/// Render `value` in decimal into a field of `field` characters
///
/// `field` is clamped to `1..=10`. If the value needs more digits than the
/// field holds, the whole field is `'-'`.
pub fn dec_word(value: u32, field: u8, mode: DecMode) -> Vec<u8, MAX_DEC_FIELD> {
    let field = usize::from(field.clamp(1, MAX_DEC_FIELD as u8));
    let mut out = Vec::new();

    // Least significant digit first; always at least one digit so zero
    // renders as "0".
    let mut digits = [0u8; MAX_DEC_FIELD];
    let mut len = 0;
    let mut rest = value;
    loop {
        digits[len] = b'0' + (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    if len > field {
        for _ in 0..field {
            let _ = out.push(OVERFLOW_FILL);
        }
        return out;
    }

    let pad = field - len;
    let pad_byte = match mode {
        DecMode::LeadingZeros => b'0',
        DecMode::AlignRight | DecMode::AlignLeft => b' ',
    };

    if mode != DecMode::AlignLeft {
        for _ in 0..pad {
            let _ = out.push(pad_byte);
        }
    }
    for &digit in digits[..len].iter().rev() {
        let _ = out.push(digit);
    }
    if mode == DecMode::AlignLeft {
        for _ in 0..pad {
            let _ = out.push(pad_byte);
        }
    }

    out
}

/// Render the low `nibbles` nibbles of `value` in uppercase hex, most
/// significant first
///
/// A nibble count outside `1..=8` renders as [`HEX_ERROR`].
pub fn hex_word(value: u32, nibbles: u8) -> Vec<u8, 11> {
    let mut out = Vec::new();

    if !(1..=MAX_NIBBLES).contains(&nibbles) {
        let _ = out.extend_from_slice(HEX_ERROR);
        return out;
    }

    for i in (0..u32::from(nibbles)).rev() {
        let _ = out.push(nibble_to_ascii((value >> (i * 4)) as u8));
    }

    out
}

/// Render a byte as two uppercase hex digits
pub fn hex_byte(byte: u8) -> [u8; 2] {
    [nibble_to_ascii(byte >> 4), nibble_to_ascii(byte)]
}

/// Render a time as `HH:MM:SS`
///
/// Each component shows its value modulo 100.
pub fn time(hrs: u8, mins: u8, secs: u8) -> [u8; TIME_WIDTH] {
    let [h1, h2] = two_digits(hrs);
    let [m1, m2] = two_digits(mins);
    let [s1, s2] = two_digits(secs);
    [h1, h2, b':', m1, m2, b':', s1, s2]
}

/// Convert the low nibble of `nibble` to an ASCII hex digit
pub fn nibble_to_ascii(nibble: u8) -> u8 {
    match nibble & 0x0F {
        n @ 0..=9 => b'0' + n,
        n => b'A' + (n - 10),
    }
}

fn two_digits(value: u8) -> [u8; 2] {
    let value = value % 100;
    [b'0' + value / 10, b'0' + value % 10]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(value: u32, field: u8, mode: DecMode) -> String {
        String::from_utf8(dec_word(value, field, mode).to_vec()).unwrap()
    }

    fn hex(value: u32, nibbles: u8) -> String {
        String::from_utf8(hex_word(value, nibbles).to_vec()).unwrap()
    }

    #[test]
    fn test_dec_modes() {
        assert_eq!(dec(123, 5, DecMode::LeadingZeros), "00123");
        assert_eq!(dec(123, 5, DecMode::AlignRight), "  123");
        assert_eq!(dec(123, 5, DecMode::AlignLeft), "123  ");
    }

    #[test]
    fn test_dec_overflow_fills_dashes() {
        assert_eq!(dec(123, 2, DecMode::LeadingZeros), "--");
        assert_eq!(dec(123, 2, DecMode::AlignRight), "--");
        assert_eq!(dec(123, 2, DecMode::AlignLeft), "--");
        assert_eq!(dec(10, 1, DecMode::LeadingZeros), "-");
    }

    #[test]
    fn test_dec_zero() {
        assert_eq!(dec(0, 1, DecMode::LeadingZeros), "0");
        assert_eq!(dec(0, 4, DecMode::LeadingZeros), "0000");
        assert_eq!(dec(0, 4, DecMode::AlignRight), "   0");
        assert_eq!(dec(0, 4, DecMode::AlignLeft), "0   ");
    }

    #[test]
    fn test_dec_powers_of_ten_at_field_boundary() {
        // Exactly fills the field
        assert_eq!(dec(9, 1, DecMode::AlignRight), "9");
        assert_eq!(dec(99, 2, DecMode::AlignLeft), "99");
        assert_eq!(dec(999_999_999, 9, DecMode::LeadingZeros), "999999999");
        // One more digit than the field
        assert_eq!(dec(100, 2, DecMode::AlignLeft), "--");
        assert_eq!(dec(1_000_000_000, 9, DecMode::AlignRight), "---------");
        // Powers of ten that fit keep their most significant digit
        assert_eq!(dec(10, 2, DecMode::LeadingZeros), "10");
        assert_eq!(dec(100, 3, DecMode::AlignRight), "100");
        assert_eq!(dec(1000, 5, DecMode::AlignLeft), "1000 ");
        assert_eq!(dec(1_000_000_000, 10, DecMode::LeadingZeros), "1000000000");
    }

    #[test]
    fn test_dec_full_width_u32() {
        assert_eq!(dec(u32::MAX, 10, DecMode::AlignRight), "4294967295");
        assert_eq!(dec(u32::MAX, 9, DecMode::AlignRight), "---------");
    }

    #[test]
    fn test_dec_field_is_clamped() {
        assert_eq!(dec(7, 0, DecMode::LeadingZeros), "7");
        assert_eq!(dec(7, 11, DecMode::LeadingZeros), "0000000007");
        assert_eq!(dec(7, 200, DecMode::AlignLeft).len(), MAX_DEC_FIELD);
    }

    #[test]
    fn test_hex_word() {
        assert_eq!(hex(0xA1, 2), "A1");
        assert_eq!(hex(0xDEAD_BEEF, 8), "DEADBEEF");
        assert_eq!(hex(0xDEAD_BEEF, 4), "BEEF");
        assert_eq!(hex(0x5, 3), "005");
        assert_eq!(hex(0xF, 1), "F");
    }

    #[test]
    fn test_hex_invalid_nibble_count() {
        assert_eq!(hex(0x1234, 9), "HexNibError");
        assert_eq!(hex(0x1234, 0), "HexNibError");
    }

    #[test]
    fn test_hex_byte() {
        assert_eq!(&hex_byte(0x00), b"00");
        assert_eq!(&hex_byte(0x9F), b"9F");
        assert_eq!(&hex_byte(0xA0), b"A0");
    }

    #[test]
    fn test_time() {
        assert_eq!(&time(0, 0, 0), b"00:00:00");
        assert_eq!(&time(12, 34, 56), b"12:34:56");
        assert_eq!(&time(9, 5, 7), b"09:05:07");
    }

    #[test]
    fn test_time_components_wrap_at_hundred() {
        assert_eq!(&time(123, 100, 255), b"23:00:55");
    }

    #[test]
    fn test_nibble_to_ascii_masks_upper_bits() {
        assert_eq!(nibble_to_ascii(0x0A), b'A');
        assert_eq!(nibble_to_ascii(0xFA), b'A');
        assert_eq!(nibble_to_ascii(0x39), b'9');
    }

    fn mode_strategy() -> impl Strategy<Value = DecMode> {
        prop_oneof![
            Just(DecMode::LeadingZeros),
            Just(DecMode::AlignRight),
            Just(DecMode::AlignLeft),
        ]
    }

    proptest! {
        #[test]
        fn prop_dec_matches_std_padding(value in any::<u32>(), field in 1u8..=10, mode in mode_strategy()) {
            let width = usize::from(field);
            let plain = value.to_string();
            let expected = if plain.len() > width {
                "-".repeat(width)
            } else {
                match mode {
                    DecMode::LeadingZeros => format!("{:0>width$}", value),
                    DecMode::AlignRight => format!("{:>width$}", value),
                    DecMode::AlignLeft => format!("{:<width$}", value),
                }
            };
            prop_assert_eq!(dec(value, field, mode), expected);
        }

        #[test]
        fn prop_hex_matches_std(value in any::<u32>(), nibbles in 1u8..=8) {
            let width = usize::from(nibbles);
            let masked = if nibbles == 8 { value } else { value & ((1u32 << (4 * u32::from(nibbles))) - 1) };
            prop_assert_eq!(hex(value, nibbles), format!("{:0width$X}", masked));
        }
    }
}
