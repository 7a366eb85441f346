//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers run the stream pipelines over in-memory buffers so tests
//! across the crate and the tests/ directory share the same setup.
#![allow(dead_code)]

use crate::codec::HexScanner;
use crate::types::{Config, ParseOutcome, Summary};
use crate::{Result, convert};

/// Run a full conversion (trailing newline included) over `input` and
/// return everything written to the output sink.
#[doc(hidden)]
pub fn run_to_vec(input: &[u8], config: &Config) -> Result<Vec<u8>> {
    let (out, _) = run_with_summary(input, config)?;
    Ok(out)
}

/// Like [`run_to_vec`], also returning the pipeline counters.
#[doc(hidden)]
pub fn run_with_summary(input: &[u8], config: &Config) -> Result<(Vec<u8>, Summary)> {
    let mut out = Vec::new();
    let summary = convert::run(config, input, &mut out)?;
    Ok((out, summary))
}

/// Collect every scan outcome for `input`, ending with `EndOfStream`.
#[doc(hidden)]
pub fn scan_all(input: &[u8]) -> Result<Vec<ParseOutcome>> {
    let mut scanner = HexScanner::new(input);
    let mut outcomes = Vec::new();
    loop {
        let outcome = scanner.next_outcome()?;
        outcomes.push(outcome);
        if outcome.is_end() {
            return Ok(outcomes);
        }
    }
}
