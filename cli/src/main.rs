mod commands;
mod terminal;

use commands::{CommandLine, generate};
use fibo_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.verbose);
    print::banner(cfg.no_banner, cfg.verbose);

    print::header("generating sequence", cfg.verbose);
    generate::generate(&cfg)
}
