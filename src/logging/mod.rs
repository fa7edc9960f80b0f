//! Tracing setup: stdout plus a rolling log file, human-readable or JSON.

mod init;
pub use init::{default_filter, init_logging};

use crate::utils::get_aegis_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "aegis-daemon.log";

/// How often the log file is rolled over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Level for this crate when `RUST_LOG` is unset.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: LogRotation,
}

/// `~/.aegis/logs`
#[must_use]
pub fn default_log_dir() -> PathBuf {
    get_aegis_home().join("logs")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: LogRotation::Daily,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
