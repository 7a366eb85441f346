// haconv/src/cli.rs

//! Command-line surface of the `haconv` binary.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::types::{Config, Direction};

const EXAMPLES: &str = "\
Examples:
  echo 'Hello, World!' | haconv -as
  echo -n '48 65 6C 6C 6F 2C 20 57 6F 72 6C 64 21 0A' | haconv -xn
  haconv -a some_file.txt | haconv -n > the_same_file.txt";

/// A hex to ascii converter (and vice versa)
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "haconv",
    disable_help_flag = true,
    args_override_self = true,
    after_help = EXAMPLES
)]
pub struct Args {
    /// convert hex digits to ascii chars (default)
    #[arg(short = 'x', overrides_with = "ascii_to_hex")]
    pub hex_to_ascii: bool,

    /// convert ascii chars to hex digits
    #[arg(short = 'a', overrides_with = "hex_to_ascii")]
    pub ascii_to_hex: bool,

    /// omit the newline after output
    #[arg(short = 'n')]
    pub omit_newline: bool,

    /// put spaces between the output characters
    #[arg(short = 's')]
    pub spaces: bool,

    /// prefix output hex digits with '0x'
    #[arg(short = 'p')]
    pub prefix: bool,

    /// interactive mode (stdin of and stdout to console)
    #[arg(short = 'i')]
    pub interactive: bool,

    /// stop at a 0xFF input byte (historical behaviour)
    #[arg(long = "legacy-eof")]
    pub legacy_eof: bool,

    /// print this help information
    #[arg(short = 'h')]
    pub help: bool,

    /// input file, standard input when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    pub ignored: Vec<PathBuf>,
}

impl Args {
    /// Resolve the parsed flags into a run configuration.
    pub fn config(&self) -> Config {
        let direction = if self.ascii_to_hex {
            Direction::AsciiToHex
        } else {
            Direction::HexToAscii
        };
        Config::new(direction)
            .omit_trailing_newline(self.omit_newline)
            .with_spaces(self.spaces)
            .with_prefix(self.prefix)
            .interactive(self.interactive)
            .legacy_eof_sentinel(self.legacy_eof)
    }

    /// Full usage text including the examples section.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
