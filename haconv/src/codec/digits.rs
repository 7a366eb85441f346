// haconv/src/codec/digits.rs

use crate::constants::{ASCII_CASE_OFFSET, HEX_DIGITS};
use crate::{Error, Result};

/// Marker for "not a hex digit" in the reverse table.
const INVALID: u8 = 0xFF;

const fn build_reverse_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < HEX_DIGITS.len() {
        let ch = HEX_DIGITS[i];
        table[ch as usize] = i as u8;
        // Letters also match when shifted into lowercase.
        if ch.is_ascii_alphabetic() {
            table[(ch + ASCII_CASE_OFFSET) as usize] = i as u8;
        }
        i += 1;
    }
    table
}

/// Character -> nibble table derived from [`HEX_DIGITS`].
static DIGIT_VALUES: [u8; 256] = build_reverse_table();

/// Return true if `ch` is one of `0-9`, `A-F` or `a-f`.
pub fn is_hex_digit(ch: u8) -> bool {
    DIGIT_VALUES[ch as usize] != INVALID
}

/// Map a hex digit character to its nibble value (0-15).
pub fn digit_to_value(ch: u8) -> Result<u8> {
    match DIGIT_VALUES[ch as usize] {
        INVALID => Err(Error::NotAHexDigit(ch)),
        v => Ok(v),
    }
}

/// Split `value` into its high and low nibble characters, always uppercase.
pub fn value_to_digits(value: u8) -> (u8, u8) {
    (
        HEX_DIGITS[(value >> 4) as usize],
        HEX_DIGITS[(value & 0x0F) as usize],
    )
}

/// Combine two digit characters, high nibble first.
pub fn digits_to_value(high: u8, low: u8) -> Result<u8> {
    Ok((digit_to_value(high)? << 4) | digit_to_value(low)?)
}
