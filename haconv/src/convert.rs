// haconv/src/convert.rs

use std::io::{BufRead, Write};

use crate::Result;
use crate::codec::{AsciiEncoder, HexDecoder};
use crate::constants::LINE_TERMINATOR;
use crate::types::{Config, Direction, Summary};

/// Run one conversion from `input` to `output` as described by `config`.
///
/// Dispatches to the decoder or encoder, then writes the trailing newline
/// unless it was turned off. The output is flushed before returning.
pub fn run<R: BufRead, W: Write + ?Sized>(
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<Summary> {
    log::debug!(
        "converting {:?} (spaces={}, prefix={}, interactive={}, legacy_eof={})",
        config.direction,
        config.insert_spaces,
        config.prefix_with_zero_x,
        config.interactive,
        config.legacy_eof_sentinel
    );

    let summary = match config.direction {
        Direction::HexToAscii => HexDecoder::new(config).decode(input, output)?,
        Direction::AsciiToHex => AsciiEncoder::new(config).encode(input, output)?,
    };

    if !config.omit_trailing_newline {
        output.write_all(&[LINE_TERMINATOR])?;
    }
    output.flush()?;

    log::debug!(
        "done: {} units, {} line breaks",
        summary.units,
        summary.line_breaks
    );
    Ok(summary)
}
