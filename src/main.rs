//! Binary entry point for `dotlink`.
use anyhow::Result;
use clap::Parser;

use dotlink_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);

    match args.command {
        cli::Command::List => commands::list::run(&args.global, &log),
        cli::Command::Link(opts) => commands::link::run(&args.global, &opts, &log),
        cli::Command::Unlink(opts) => commands::unlink::run(&args.global, &opts, &log),
    }
}
