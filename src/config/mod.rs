//! Daemon configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, the
//! optional TOML file (`~/.aegis/config.toml` or `--config`), `AEGIS_*`
//! environment variables, and command-line flags. clap merges the last two
//! into [`Args`]; [`Settings::resolve`] lays them over the file.

mod loader;
pub use loader::{default_config_path, load_config};

use crate::app::Args;
use crate::cors::{parse_origins, DEFAULT_CORS_ORIGINS};
use crate::index::DEFAULT_PAGE_SIZE;
use crate::logging::{default_log_dir, LogConfig, LogRotation};
use crate::utils::get_aegis_home;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid listen address '{0}'")]
    InvalidAddr(String),

    #[error("page_size must be at least 1")]
    InvalidPageSize,
}

/// `[server]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub addr: Option<String>,
    pub cors_origins: Option<Vec<String>>,
}

/// `[storage]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    pub data_dir: Option<PathBuf>,
    pub ephemeral: Option<bool>,
}

/// `[listing]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListingSection {
    pub page_size: Option<usize>,
}

/// `[logging]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub json: Option<bool>,
    pub rotation: Option<LogRotation>,
    pub dir: Option<PathBuf>,
}

/// Contents of the TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub listing: ListingSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Fully resolved daemon settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    /// Keep records in memory only.
    pub ephemeral: bool,
    pub cors_origins: Vec<String>,
    pub page_size: usize,
    pub log: LogConfig,
}

/// `~/.aegis/data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    get_aegis_home().join("data")
}

impl Settings {
    /// Lay `args` (CLI and environment) over `file` over the defaults.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let addr_str = args
            .addr
            .clone()
            .or(file.server.addr)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_str
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr_str.clone()))?;

        let cors_origins = match (&args.cors_origins, file.server.cors_origins) {
            (Some(list), _) => parse_origins(list),
            (None, Some(list)) => list,
            (None, None) => parse_origins(DEFAULT_CORS_ORIGINS),
        };

        let page_size = args
            .page_size
            .or(file.listing.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        let log = LogConfig {
            log_dir: args
                .log_dir
                .clone()
                .or(file.logging.dir)
                .unwrap_or_else(default_log_dir),
            log_level: Level::INFO,
            json_format: args.log_json || file.logging.json.unwrap_or(false),
            rotation: args
                .log_rotation
                .or(file.logging.rotation)
                .unwrap_or_default(),
        };

        Ok(Self {
            addr,
            data_dir: args
                .data_dir
                .clone()
                .or(file.storage.data_dir)
                .unwrap_or_else(default_data_dir),
            ephemeral: args.ephemeral || file.storage.ephemeral.unwrap_or(false),
            cors_origins,
            page_size,
            log,
        })
    }
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
