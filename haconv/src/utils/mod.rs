//! Utilities for haconv: small, reusable helpers on top of the codec.

pub mod hex;

pub use hex::*;
