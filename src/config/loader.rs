use super::{ConfigError, FileConfig};
use crate::utils::get_aegis_home;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `~/.aegis/config.toml`
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_aegis_home().join("config.toml")
}

/// Read the config file.
///
/// Without an explicit `path` the default location is used, and a missing file
/// there yields `FileConfig::default()`. An explicitly given path must exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path();
            if !p.exists() {
                debug!("Config not found at {}; using defaults", p.display());
                return Ok(FileConfig::default());
            }
            p
        }
    };
    let content = std::fs::read_to_string(&path)?;
    let config: FileConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
