//! # Sequence Runner
//!
//! Implements the one use case of the tool: print the first `length` terms.

use std::io::Write;
use std::time::{Duration, Instant};

use fibo_common::config::Config;
use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::fibonacci::Fibonacci;
use crate::output;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that reached the writer.
    pub terms: usize,
    /// Last term generated, if any.
    pub last: Option<BigUint>,
    pub elapsed: Duration,
}

/// Streams `cfg.length` terms to `writer`.
///
/// A reader that hangs up early (`fibo | head -1`) ends the run normally;
/// the summary then counts only the lines written before it left.
pub fn run<W: Write>(cfg: &Config, writer: &mut W) -> anyhow::Result<RunSummary> {
    let start_time: Instant = Instant::now();
    debug!(length = cfg.length, "generating sequence");

    let mut last: Option<BigUint> = None;
    let terms = Fibonacci::new()
        .take(cfg.length)
        .enumerate()
        .map(|(idx, value)| {
            trace!(idx, value = %value, "term");
            last = Some(value.clone());
            value
        });

    let written: usize = match output::write_terms(writer, terms) {
        Ok(written) => written,
        Err(err) if err.is_broken_pipe() => {
            debug!("output closed by reader");
            err.written().unwrap_or(cfg.length)
        }
        Err(err) => return Err(err.into()),
    };

    Ok(RunSummary {
        terms: written,
        last,
        elapsed: start_time.elapsed(),
    })
}
