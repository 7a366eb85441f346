// haconv/src/codec/encoder.rs

use std::io::{BufRead, Write};

use crate::Result;
use crate::codec::digits::value_to_digits;
use crate::constants::{
    HEX_PREFIX, LEGACY_EOF_SENTINEL, LINE_TERMINATOR, MAX_UNIT_LEN, UNIT_SEPARATOR,
};
use crate::stream::read_byte;
use crate::types::{Config, Summary};

/// Bytes -> hex pipeline.
pub struct AsciiEncoder<'a> {
    config: &'a Config,
}

impl<'a> AsciiEncoder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Format one byte as its hex unit into `buf`, returning the used length.
    pub fn format_byte(&self, value: u8, buf: &mut [u8; MAX_UNIT_LEN]) -> usize {
        let mut len = 0;
        if self.config.prefix_with_zero_x {
            buf[..HEX_PREFIX.len()].copy_from_slice(HEX_PREFIX);
            len += HEX_PREFIX.len();
        }
        let (high, low) = value_to_digits(value);
        buf[len] = high;
        buf[len + 1] = low;
        len += 2;
        if self.config.insert_spaces {
            buf[len] = UNIT_SEPARATOR;
            len += 1;
        }
        len
    }

    /// Write the output for a single input byte.
    pub fn encode_byte<W: Write + ?Sized>(&self, value: u8, out: &mut W) -> Result<()> {
        // Interactive mode mirrors input lines instead of encoding them.
        if self.config.interactive && value == LINE_TERMINATOR {
            out.write_all(&[LINE_TERMINATOR])?;
            out.flush()?;
            return Ok(());
        }
        let mut buf = [0u8; MAX_UNIT_LEN];
        let len = self.format_byte(value, &mut buf);
        out.write_all(&buf[..len])?;
        Ok(())
    }

    /// Encode `input` until it is exhausted.
    pub fn encode<R: BufRead, W: Write + ?Sized>(
        &self,
        mut input: R,
        out: &mut W,
    ) -> Result<Summary> {
        let mut summary = Summary::default();
        while let Some(value) = read_byte(&mut input)? {
            if self.config.legacy_eof_sentinel && value == LEGACY_EOF_SENTINEL {
                log::debug!("stopping at legacy end-of-stream marker");
                break;
            }
            if self.config.interactive && value == LINE_TERMINATOR {
                summary.line_breaks += 1;
            } else {
                summary.units += 1;
            }
            self.encode_byte(value, out)?;
        }
        Ok(summary)
    }
}
