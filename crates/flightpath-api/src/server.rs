//! # Server Lifecycle
//!
//! Runs the router on a bound listener until a shutdown signal arrives, then
//! drains in-flight requests for at most [`AppConfig::shutdown_grace`].

use std::future::{Future, IntoFuture};

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::AppConfig;

/// Serve [`crate::app`] on `listener` until `signal` resolves.
///
/// Returns once every connection has closed, or once the grace period after
/// the signal has elapsed, whichever comes first.
pub async fn serve<F>(listener: TcpListener, config: &AppConfig, signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, crate::app(config))
        .with_graceful_shutdown(async move {
            signal.await;
            tracing::info!("signal received, shutting down");
            let _ = signalled_tx.send(());
        })
        .into_future();

    let grace = config.shutdown_grace;
    let deadline = async move {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            // The server finished on its own; the other branch has already won.
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => result.context("server terminated with an error")?,
        () = deadline => {
            tracing::warn!(?grace, "shutdown grace period expired with requests in flight");
        }
    }

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
