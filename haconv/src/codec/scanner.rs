// haconv/src/codec/scanner.rs

use std::io::BufRead;

use crate::Result;
use crate::codec::digits::{digit_to_value, is_hex_digit};
use crate::constants::{LEGACY_EOF_SENTINEL, LINE_TERMINATOR};
use crate::stream::read_byte;
use crate::types::ParseOutcome;

/// Position inside a hex digit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NeedFirstDigit,
    NeedSecondDigit { high: u8 },
}

/// Pulls hex digit pairs out of a character stream.
///
/// Each call to [`HexScanner::next_outcome`] consumes just enough input to
/// produce one [`ParseOutcome`]:
///
/// - a hex digit (either case) advances the pair;
/// - `'\n'` aborts with [`ParseOutcome::LineBreak`];
/// - end of input aborts with [`ParseOutcome::EndOfStream`];
/// - anything else is skipped and restarts the pair.
///
/// A half-read pair is dropped whenever the scan is aborted or restarted.
pub struct HexScanner<R> {
    reader: R,
    legacy_eof_sentinel: bool,
    skipped: u64,
}

impl<R: BufRead> HexScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            legacy_eof_sentinel: false,
            skipped: 0,
        }
    }

    /// Stop at a 0xFF byte as if the input had ended.
    pub fn with_legacy_eof_sentinel(mut self, yes: bool) -> Self {
        self.legacy_eof_sentinel = yes;
        self
    }

    /// Scan for the next byte, line break or end of stream.
    pub fn next_outcome(&mut self) -> Result<ParseOutcome> {
        let mut state = ScanState::NeedFirstDigit;
        loop {
            let ch = match read_byte(&mut self.reader)? {
                None => return Ok(ParseOutcome::EndOfStream),
                Some(LEGACY_EOF_SENTINEL) if self.legacy_eof_sentinel => {
                    return Ok(ParseOutcome::EndOfStream);
                }
                Some(ch) => ch,
            };

            if ch == LINE_TERMINATOR {
                return Ok(ParseOutcome::LineBreak);
            }

            if !is_hex_digit(ch) {
                log::trace!("skipping non-hex input {:#04x}", ch);
                self.skipped += 1;
                state = ScanState::NeedFirstDigit;
                continue;
            }

            let nibble = digit_to_value(ch)?;
            state = match state {
                ScanState::NeedFirstDigit => ScanState::NeedSecondDigit { high: nibble },
                ScanState::NeedSecondDigit { high } => {
                    return Ok(ParseOutcome::Byte((high << 4) | nibble));
                }
            };
        }
    }

    /// Number of characters filtered out so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
