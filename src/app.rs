use crate::logging::LogRotation;
use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Aegis Daemon - Insurance console API over a file-based entity store
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.aegis/config.toml)
    #[arg(short, long, env = "AEGIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to (default: 127.0.0.1:3000)
    #[arg(short, long, env = "AEGIS_ADDR")]
    pub addr: Option<String>,

    /// Directory holding the record files (default: ~/.aegis/data)
    #[arg(long, env = "AEGIS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep records in memory only; nothing is written to disk
    #[arg(long, env = "AEGIS_EPHEMERAL")]
    pub ephemeral: bool,

    /// Comma-separated list of allowed CORS origins. "*" allows all.
    /// Example: --cors-origins=http://localhost:5173,https://console.example.com
    #[arg(long, env = "AEGIS_CORS_ORIGINS")]
    pub cors_origins: Option<String>,

    /// Default number of records per listing page
    #[arg(long, env = "AEGIS_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "AEGIS_LOG_JSON")]
    pub log_json: bool,

    /// Log rotation period
    #[arg(long, env = "AEGIS_LOG_ROTATION", value_enum)]
    pub log_rotation: Option<LogRotation>,

    /// Custom log directory (default: ~/.aegis/logs)
    #[arg(long, env = "AEGIS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Explain a failed bind on stderr, with hints when the port is taken.
pub fn report_server_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of aegis-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill aegis-daemon");
        eprintln!("  2. Use a different port:        aegis-daemon --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
