// haconv/src/constants.rs
//! Common constants used across the crate

/// Canonical digit table. Index `i` is the character for nibble `i`.
pub const HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Distance between an uppercase ASCII letter and its lowercase form.
pub const ASCII_CASE_OFFSET: u8 = b'a' - b'A';

/// The only character treated as an end-of-line by either pipeline.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Separator written after each output unit when spacing is enabled.
pub const UNIT_SEPARATOR: u8 = b' ';

/// Prefix written before each hex pair when prefixing is enabled.
pub const HEX_PREFIX: &[u8; 2] = b"0x";

/// Longest single encoded unit: prefix, two digits and separator.
pub const MAX_UNIT_LEN: usize = HEX_PREFIX.len() + 2 + 1;

/// Byte value historically treated as an end-of-stream marker.
pub const LEGACY_EOF_SENTINEL: u8 = 0xFF;
