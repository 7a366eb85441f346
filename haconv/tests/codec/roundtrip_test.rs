use haconv::test_support::run_to_vec;
use haconv::{Config, Direction};
use proptest::prelude::*;

proptest! {
    #[test]
    fn encode_then_decode_restores_input(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let encode = Config::new(Direction::AsciiToHex).omit_trailing_newline(true);
        let decode = Config::new(Direction::HexToAscii).omit_trailing_newline(true);

        let hex = run_to_vec(&bytes, &encode).unwrap();
        let back = run_to_vec(&hex, &decode).unwrap();
        prop_assert_eq!(back, bytes);
    }

    #[test]
    fn lowercase_hex_decodes_the_same(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let decode = Config::default().omit_trailing_newline(true);
        let lower = hex::encode(&bytes);
        prop_assert_eq!(run_to_vec(lower.as_bytes(), &decode).unwrap(), bytes);
    }

    #[test]
    fn decoding_never_fails_on_arbitrary_input(input in prop::collection::vec(any::<u8>(), 0..256)) {
        // Anything that is not a hex digit is filtered, never an error.
        prop_assert!(run_to_vec(&input, &Config::default()).is_ok());
    }
}
