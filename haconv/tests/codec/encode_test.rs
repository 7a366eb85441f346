#[path = "../common/mod.rs"]
mod common;

use haconv::test_support::run_to_vec;
use haconv::{Config, Direction};

fn encoder() -> Config {
    Config::new(Direction::AsciiToHex)
}

#[test]
fn usage_example_encodes_hello_world() {
    let config = encoder().with_spaces(true);
    assert_eq!(
        run_to_vec(common::fixtures::HELLO_WORLD, &config).unwrap(),
        common::fixtures::HELLO_WORLD_SPACED_HEX
    );
}

#[test]
fn newline_byte_in_both_modes() {
    assert_eq!(run_to_vec(&[0x0A], &encoder().interactive(true)).unwrap(), b"\n\n");
    assert_eq!(run_to_vec(&[0x0A], &encoder()).unwrap(), b"0A\n");
}

#[test]
fn spaces_and_prefix() {
    let config = encoder().with_spaces(true).with_prefix(true);
    assert_eq!(run_to_vec(&[0x48, 0x69], &config).unwrap(), b"0x48 0x69 \n");
}

#[test]
fn every_byte_matches_hex_crate() {
    let bytes = common::fixtures::all_bytes();
    let config = encoder().omit_trailing_newline(true);
    let out = run_to_vec(&bytes, &config).unwrap();
    assert_eq!(out, hex::encode_upper(&bytes).into_bytes());
}

#[test]
fn legacy_sentinel_truncates_at_ff() {
    let bytes = common::fixtures::all_bytes();
    let config = encoder().omit_trailing_newline(true).legacy_eof_sentinel(true);
    let out = run_to_vec(&bytes, &config).unwrap();
    assert_eq!(out, hex::encode_upper(&bytes[..255]).into_bytes());
}
