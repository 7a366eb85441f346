// haconv/src/types.rs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Parse hex digit pairs into raw bytes.
    #[default]
    HexToAscii,
    /// Render raw bytes as hex digit pairs.
    AsciiToHex,
}

/// Resolved options for a single run. Built once, then only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub direction: Direction,
    pub omit_trailing_newline: bool,
    pub insert_spaces: bool,
    pub prefix_with_zero_x: bool,
    pub interactive: bool,
    /// Treat a 0xFF input byte as end of stream (historical behaviour).
    pub legacy_eof_sentinel: bool,
}

impl Config {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn omit_trailing_newline(mut self, yes: bool) -> Self {
        self.omit_trailing_newline = yes;
        self
    }

    pub fn with_spaces(mut self, yes: bool) -> Self {
        self.insert_spaces = yes;
        self
    }

    pub fn with_prefix(mut self, yes: bool) -> Self {
        self.prefix_with_zero_x = yes;
        self
    }

    pub fn interactive(mut self, yes: bool) -> Self {
        self.interactive = yes;
        self
    }

    pub fn legacy_eof_sentinel(mut self, yes: bool) -> Self {
        self.legacy_eof_sentinel = yes;
        self
    }
}

/// Result of one scan attempt over the hex input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Two hex digits were consumed and combined.
    Byte(u8),
    /// A line terminator was read before a full pair.
    LineBreak,
    /// The input is exhausted.
    EndOfStream,
}

impl ParseOutcome {
    pub fn is_end(&self) -> bool {
        matches!(self, ParseOutcome::EndOfStream)
    }
}

/// Counters reported by a finished pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Bytes decoded or bytes encoded as hex pairs.
    pub units: u64,
    /// Line breaks seen (decoder) or passed through (interactive encoder).
    pub line_breaks: u64,
}
