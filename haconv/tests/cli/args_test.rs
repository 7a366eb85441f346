use std::path::PathBuf;

use clap::Parser;
use haconv::cli::Args;
use haconv::{Config, Direction};

#[test]
fn flags_resolve_to_config() {
    let args = Args::try_parse_from(["haconv", "-asp", "-n", "dump.bin"]).unwrap();
    assert_eq!(args.file, Some(PathBuf::from("dump.bin")));
    assert_eq!(
        args.config(),
        Config::new(Direction::AsciiToHex)
            .with_spaces(true)
            .with_prefix(true)
            .omit_trailing_newline(true)
    );
}

#[test]
fn direction_flags_override_each_other() {
    let args = Args::try_parse_from(["haconv", "-a", "-x"]).unwrap();
    assert_eq!(args.config().direction, Direction::HexToAscii);
}
