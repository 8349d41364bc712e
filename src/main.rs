mod analyze_cmd;
mod check_cmd;
mod cli;
mod config;
mod convert;
mod export_cmd;
mod logging;
mod power_cmd;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check_cmd::run(args),
        Command::Export(args) => export_cmd::run(args),
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Power(args) => power_cmd::run(args),
    }
}
