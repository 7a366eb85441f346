// haconv/src/lib.rs

//! haconv
//!
//! Hex to ascii converter (and vice versa) over byte streams.
#![warn(missing_docs)]

pub mod cli;
pub mod codec;
pub mod constants;
pub mod convert;
pub mod error;
pub mod prelude;
pub mod stream;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the run configuration are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
