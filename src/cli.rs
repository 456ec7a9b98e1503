use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semverpair", version, about = "Encode or decode semver strings")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/semverpair/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::Normal,
        help = "Diagnostics written to stderr (SEMVERPAIR_LOG overrides)"
    )]
    pub log_level: LogLevel,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a pair of semver strings
    Encode {
        #[arg(
            short,
            long,
            help = "First version to encode (also can be provided as a positional argument)"
        )]
        first: Option<String>,
        #[arg(
            short,
            long,
            help = "Second version to encode (also can be provided as a positional argument)"
        )]
        second: Option<String>,
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u8).range(1..=9),
            help = "Digits per packed value; picked from the values when omitted"
        )]
        width: Option<u8>,
        #[arg(value_name = "VERSION")]
        args: Vec<String>,
    },
    /// Decode a semver string
    Decode {
        #[arg(
            short = 'v',
            long = "version",
            help = "Version to decode (also can be provided as a positional argument)"
        )]
        version: Option<String>,
        #[arg(value_name = "VERSION")]
        args: Vec<String>,
    },
    /// Show version
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Quiet,
    Normal,
    Debug,
}
