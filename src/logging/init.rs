use super::LogConfig;
use super::LOG_FILENAME;
use color_eyre::eyre::{Result, WrapErr};
use tracing::Level;
use tracing_appender::rolling::RollingFileAppender;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// `RUST_LOG` if set, otherwise `aegis_daemon=<level>`.
#[must_use]
pub fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aegis_daemon={level}")))
}

/// Install the global subscriber. Call once, before the server starts.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .wrap_err_with(|| format!("creating log directory {}", config.log_dir.display()))?;
    let file_appender =
        RollingFileAppender::new(config.rotation.into(), &config.log_dir, LOG_FILENAME);
    let level = config.log_level;

    let registry = tracing_subscriber::registry().with(ErrorLayer::default());
    if config.json_format {
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_filter(default_filter(level));
        let stdout_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_current_span(true)
            .with_filter(default_filter(level));
        registry.with(file_layer).with(stdout_layer).try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .with_filter(default_filter(level));
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_filter(default_filter(level));
        registry.with(file_layer).with(stdout_layer).try_init()?;
    }
    Ok(())
}
