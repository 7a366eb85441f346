// haconv/src/stream/input.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::Path;

use crate::{Error, Result};

/// Input source for a run: standard input or an opened file.
pub enum Input {
    Stdin(StdinLock<'static>),
    File(BufReader<File>),
}

impl Input {
    pub fn stdin() -> Self {
        Input::Stdin(io::stdin().lock())
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin(_))
    }
}

/// Path argument that names standard input.
const STDIN_PATH: &str = "-";

/// Open `path` for reading, or standard input when no path (or `-`) is given.
pub fn open_input(path: Option<&Path>) -> Result<Input> {
    match path {
        None => Ok(Input::stdin()),
        Some(path) if path == Path::new(STDIN_PATH) => Ok(Input::stdin()),
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::InputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("reading from {}", path.display());
            Ok(Input::File(BufReader::new(file)))
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(r) => r.read(buf),
            Input::File(r) => r.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Input::Stdin(r) => r.fill_buf(),
            Input::File(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Input::Stdin(r) => r.consume(amt),
            Input::File(r) => r.consume(amt),
        }
    }
}
