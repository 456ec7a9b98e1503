use crate::cli::LogLevel;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Overrides `--log-level` with an `EnvFilter` directive string.
pub const LOG_ENV: &str = "SEMVERPAIR_LOG";

pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match level {
            LogLevel::Quiet => "semverpair=error",
            LogLevel::Normal => "semverpair=warn",
            LogLevel::Debug => "semverpair=debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
