//! In-memory helpers built on the streaming codec.
//!
//! Handy when the data is already a slice: they run the same encoder and
//! scanner the CLI uses, minus the trailing newline.

use crate::codec::{AsciiEncoder, HexScanner};
use crate::types::{Config, ParseOutcome};

/// Encode `bytes` using the formatting options of `config`.
///
/// Example: `&[0xde, 0xad]` with spacing -> `"DE AD "`
pub fn encode_to_string(bytes: &[u8], config: &Config) -> String {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    // Reading a slice and writing a Vec cannot fail
    let _ = AsciiEncoder::new(config).encode(bytes, &mut out);
    out.into_iter().map(char::from).collect()
}

/// Decode every hex pair in `text`, ignoring line breaks and any character
/// that is not a hex digit.
pub fn decode_to_bytes(text: &[u8]) -> Vec<u8> {
    let mut scanner = HexScanner::new(text);
    let mut out = Vec::with_capacity(text.len() / 2);
    loop {
        match scanner.next_outcome() {
            Ok(ParseOutcome::Byte(b)) => out.push(b),
            Ok(ParseOutcome::LineBreak) => {}
            Ok(ParseOutcome::EndOfStream) => break,
            // Reading a slice cannot fail and the scanner only looks up
            // characters it has already validated
            Err(e) => {
                log::warn!("hex decode stopped early: {}", e);
                break;
            }
        }
    }
    out
}
