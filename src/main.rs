use anyhow::{Context, Result};
use tracing::{info, warn};

use signhook_receiver::config::AppConfig;
use signhook_receiver::logging::init_tracing;
use signhook_receiver::{build_app_state, create_app};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(config.log_dir.as_deref())?;

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!(
        chatty_logs = config.chatty_logs,
        document_target = ?config.document_target,
        "Configuration loaded"
    );

    let addr = config.resolve_bind_addr().await?;
    let app = create_app(build_app_state(&config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
