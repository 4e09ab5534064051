pub mod config;
pub mod error;
pub mod macros;

pub use tracing;
