use clap::Parser;

mod cli;
mod config;
mod logging;
mod output;

use crate::{cli::Args, config::Config, output::report::print_report};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::try_from(args)?;
    print_report(&config)
}
