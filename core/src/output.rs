//! Plain-text rendering of sequence terms.

use std::fmt::Display;
use std::io::Write;

use fibo_common::error::{OutputError, OutputResult};

pub const MARKER: &str = "->";

pub fn format_term<T: Display>(value: T) -> String {
    format!("{MARKER} {value}")
}

/// Writes one `-> <value>` line per term and flushes the writer.
///
/// Returns how many lines were written.
pub fn write_terms<W, I>(writer: &mut W, terms: I) -> OutputResult<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written: usize = 0;
    for value in terms {
        writeln!(writer, "{}", format_term(value)).map_err(|source| OutputError::Write {
            index: written,
            source,
        })?;
        written += 1;
    }
    writer.flush().map_err(OutputError::Flush)?;
    Ok(written)
}
