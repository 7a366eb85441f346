// haconv/src/codec/mod.rs

pub mod decoder;
pub mod digits;
pub mod encoder;
pub mod scanner;

pub use decoder::HexDecoder;
pub use digits::{digit_to_value, digits_to_value, is_hex_digit, value_to_digits};
pub use encoder::AsciiEncoder;
pub use scanner::HexScanner;
