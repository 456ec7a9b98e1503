use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_about_commands, handle_runtime_commands};
use services::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_about_commands(cli)? {
        return Ok(());
    }

    if !handle_runtime_commands(cli)? {
        anyhow::bail!("unsupported command");
    }
    Ok(())
}
