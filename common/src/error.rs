//! Errors raised while writing a sequence out.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// A line could not be written. `index` is the zero-based term that failed.
    #[error("failed to write term {index}")]
    Write {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush output")]
    Flush(#[source] io::Error),
}

impl OutputError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Write { source, .. } => source,
            Self::Flush(source) => source,
        }
    }

    /// The reader went away, e.g. `fibo | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::BrokenPipe
    }

    /// Lines fully written before the failure.
    pub fn written(&self) -> Option<usize> {
        match self {
            Self::Write { index, .. } => Some(*index),
            Self::Flush(_) => None,
        }
    }
}

pub type OutputResult<T> = Result<T, OutputError>;
