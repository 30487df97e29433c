//! keyauth gateway binary.
//!
//! Loads config and the key registry, then serves `/`, `/health` and
//! `/validate` until Ctrl-C or SIGTERM.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use keyauth_core::error::{KeyAuthError, Result};
use keyauth_gateway::{app_state, cli::Cli, keys, router};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, code = e.code().as_str(), "keyauth-gateway failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = cli.resolve_config()?;
    let registry = keys::load_registry(&cfg.keys, cli.env_file.as_deref())?;

    let host = cfg.server.host.clone();
    let port = cfg.server.port;
    let key_count = registry.len();

    let state = app_state::AppState::new(cfg, registry);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| KeyAuthError::Internal(format!("bind {host}:{port} failed: {e}")))?;

    tracing::info!(%host, port, key_count, debug = cli.debug, "keyauth-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KeyAuthError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
