//! # Fibo Core
//!
//! Sequence generation and rendering behind the `fibo` binary.
//!
//! * **[`fibonacci`]**: the lazy generator and the bounded helpers built on it.
//! * **[`output`]**: turns terms into the `-> <value>` lines written to stdout.
//! * **[`runner`]**: the single use case, wiring a [`Config`](fibo_common::config::Config)
//!   to a writer.

pub mod fibonacci;
pub mod output;
pub mod runner;
