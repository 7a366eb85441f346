// haconv/src/codec/decoder.rs

use std::io::{BufRead, Write};

use crate::Result;
use crate::codec::scanner::HexScanner;
use crate::constants::{LINE_TERMINATOR, UNIT_SEPARATOR};
use crate::types::{Config, ParseOutcome, Summary};

/// Hex -> bytes pipeline: drives a [`HexScanner`] and writes what it finds.
pub struct HexDecoder<'a> {
    config: &'a Config,
}

impl<'a> HexDecoder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Write the output for a single scan outcome.
    ///
    /// Returns `false` once the stream has ended.
    pub fn emit<W: Write + ?Sized>(&self, outcome: ParseOutcome, out: &mut W) -> Result<bool> {
        match outcome {
            ParseOutcome::Byte(value) => {
                if self.config.insert_spaces {
                    out.write_all(&[value, UNIT_SEPARATOR])?;
                } else {
                    out.write_all(&[value])?;
                }
            }
            ParseOutcome::LineBreak => {
                if self.config.interactive {
                    out.write_all(&[LINE_TERMINATOR])?;
                    out.flush()?;
                }
            }
            ParseOutcome::EndOfStream => return Ok(false),
        }
        Ok(true)
    }

    /// Decode `input` until it is exhausted.
    pub fn decode<R: BufRead, W: Write + ?Sized>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<Summary> {
        let mut scanner =
            HexScanner::new(input).with_legacy_eof_sentinel(self.config.legacy_eof_sentinel);
        let mut summary = Summary::default();

        loop {
            let outcome = scanner.next_outcome()?;
            match outcome {
                ParseOutcome::Byte(_) => summary.units += 1,
                ParseOutcome::LineBreak => summary.line_breaks += 1,
                ParseOutcome::EndOfStream => {}
            }
            if !self.emit(outcome, out)? {
                break;
            }
        }

        if scanner.skipped() > 0 {
            log::debug!("filtered {} non-hex characters", scanner.skipped());
        }
        Ok(summary)
    }
}
