pub mod generate;

use clap::{ArgAction, Parser};
use fibo_common::config::{Config, DEFAULT_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "fibo", version)]
#[command(about = "Prints the first terms of the Fibonacci sequence.")]
pub struct CommandLine {
    /// Number of terms to print
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Show more diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Skip the banner in verbose mode
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            length: self.length,
            verbose: self.verbose,
            no_banner: self.no_banner,
        }
    }
}
