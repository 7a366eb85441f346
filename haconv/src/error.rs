// haconv/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Reverse digit lookup was handed something outside `0-9A-Fa-f`.
    #[error("not a hex digit: {0:#04x}")]
    NotAHexDigit(u8),

    #[error("cannot open {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
