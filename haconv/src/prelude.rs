// haconv/src/prelude.rs

pub use crate::codec::{AsciiEncoder, HexDecoder, HexScanner};
pub use crate::convert::run;
pub use crate::stream::{Input, open_input};
pub use crate::{Config, Direction, Error, ParseOutcome, Result, Summary};

// Re-export small utilities for convenience
pub use crate::codec::{digit_to_value, value_to_digits};
pub use crate::utils::{decode_to_bytes, encode_to_string};
