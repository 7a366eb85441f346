// haconv/src/stream/mod.rs

pub mod input;

pub use input::{Input, open_input};

use std::io::{self, BufRead};

/// Pull a single byte from `reader`, `None` once the stream is exhausted.
///
/// End of stream is reported out of band so every byte value, 0xFF
/// included, can be returned as data.
pub fn read_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let Some(&b) = buf.first() else {
            return Ok(None);
        };
        reader.consume(1);
        return Ok(Some(b));
    }
}
