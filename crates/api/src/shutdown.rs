//! Graceful shutdown on SIGINT or SIGTERM.
//!
//! Follows the axum graceful-shutdown example:
//! <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>

use tokio::signal;
use tracing::{error, info};

/// Resolves once the process is asked to stop. A signal handler that cannot
/// be installed is logged and never fires, so the other one still applies.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT"),
            Err(err) => {
                error!(%err, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM");
            }
            Err(err) => {
                error!(%err, "Failed to install SIGTERM handler");
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
}

/// Waits for a shutdown signal, then runs `shutdown_handler` before in-flight
/// requests are drained.
pub async fn shutdown_signal_with_handler<F, Fut>(shutdown_handler: F)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    shutdown_signal().await;
    shutdown_handler().await;
}
