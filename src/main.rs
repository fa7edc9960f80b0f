use aegis_daemon::app::{report_server_error, Args};
use aegis_daemon::logging::init_logging;
use aegis_daemon::{
    build_router, load_config, AppState, Backend, EntityStore, FsBackend, MemoryBackend,
    Settings, ShutdownSignal,
};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();
    let file = load_config(args.config.as_deref()).wrap_err("loading config file")?;
    let settings = Settings::resolve(&args, file)?;

    let log_file = settings.log.log_file();
    if let Err(e) = init_logging(&settings.log) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let backend: Arc<dyn Backend> = if settings.ephemeral {
        warn!("Running with in-memory storage; records are lost on exit");
        Arc::new(MemoryBackend::new())
    } else {
        tokio::fs::create_dir_all(&settings.data_dir)
            .await
            .wrap_err_with(|| format!("creating data directory {}", settings.data_dir.display()))?;
        info!("Data directory: {}", settings.data_dir.display());
        Arc::new(FsBackend::new(settings.data_dir.clone()))
    };

    let state = AppState::new(&EntityStore::new(backend), settings.page_size);
    info!("CORS origins: {}", settings.cors_origins.join(", "));
    let app = build_router(state, settings.cors_origins.clone());

    let (shutdown_tx, mut shutdown_rx) = watch::channel(ShutdownSignal::None);
    tokio::spawn(async move {
        wait_for_signal().await;
        let _ = shutdown_tx.send(ShutdownSignal::Shutdown);
    });

    let addr = settings.addr;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };
    info!("Starting Aegis daemon on http://{}", addr);

    let server_result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while shutdown_rx.changed().await.is_ok() {
                if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
                    info!("Received shutdown signal, stopping server...");
                    break;
                }
            }
        })
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Aegis daemon stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
