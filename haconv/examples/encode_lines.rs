// Encode a few lines in interactive mode through the library API.
//
// Usage:
//   cargo run -p haconv --example encode_lines

use haconv::prelude::*;

fn main() -> Result<()> {
    let config = Config::new(Direction::AsciiToHex)
        .with_spaces(true)
        .with_prefix(true)
        .interactive(true);

    let input = b"Hello\nWorld\n";
    let mut out = Vec::new();
    let summary = run(&config, &input[..], &mut out)?;

    print!("{}", String::from_utf8_lossy(&out));
    println!(
        "encoded {} bytes over {} lines",
        summary.units, summary.line_breaks
    );

    let back = decode_to_bytes(&out);
    println!("decoded back: {:?}", String::from_utf8_lossy(&back));
    Ok(())
}
