use crate::domain::models::ConfigFile;
use crate::services::pairing::{Packing, Width};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config/semverpair/config.toml"))
}

/// Loads the config file. An explicit `path` must exist; the default location
/// is optional.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&raw)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Picks the packing strategy. A width given on the command line beats the
/// config file.
pub fn resolve_packing(cli_width: Option<u8>, config: &ConfigFile) -> anyhow::Result<Packing> {
    match cli_width.or(config.encode.width) {
        Some(digits) => Ok(Packing::Fixed(Width::new(digits)?)),
        None => Ok(Packing::Auto),
    }
}
