// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Listener setup, serving and graceful shutdown
//!
//! Binding is the only fallible startup step: if the port is taken or
//! privileged, [`bind`] returns [`AppError::Bind`] and nothing is served.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{AppState, create_router};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Binds the TCP listener at the configured address
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(addr).await.map_err(|source| {
        tracing::error!("Failed to bind address {}: {}", addr, source);
        AppError::Bind { addr, source }
    })
}

/// Serves the API on `listener` until `shutdown_rx` flips to `true`
///
/// In-flight requests are drained before returning.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // A dropped sender also ends the wait
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

/// Flips `shutdown_tx` on Ctrl+C or SIGTERM
pub fn spawn_signal_handler(shutdown_tx: watch::Sender<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            use tokio::signal::unix::{SignalKind, signal};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
            _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
        }

        let _ = shutdown_tx.send(true);
    })
}
