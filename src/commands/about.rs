use crate::cli::{Cli, Commands};
use crate::domain::models::VersionReport;
use crate::services::output::print_report;
use clap::CommandFactory;

pub fn handle_about_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Version) => {
            let report = VersionReport {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            print_report(cli.json, &report, |r| {
                format!("{} version: {}", r.name, r.version)
            })?;
            Ok(true)
        }
        None => {
            Cli::command().write_help(&mut std::io::stderr())?;
            anyhow::bail!("run one of the available sub-commands")
        }
        Some(_) => Ok(false),
    }
}
