use std::io;

use fibo_common::config::Config;
use fibo_core::runner::{self, RunSummary};

use crate::terminal::print;

pub fn generate(cfg: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let summary: RunSummary = runner::run(cfg, &mut handle)?;

    print::summary(&summary, cfg.verbose);
    Ok(())
}
