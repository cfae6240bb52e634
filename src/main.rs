use std::sync::Arc;

use analytics_service::logging::setup_tracing;
use analytics_service::prelude::*;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл (до логирования: RUST_LOG может быть в нём)
    let dotenv_path = load_dotenv();

    // Инициализация логирования
    setup_tracing();

    if let Some(path) = &dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Конфигурация читается один раз
    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!(
        "{} v{} starting",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    spawn_signal_handler(shutdown_tx);

    let listener = bind(&config).await?;
    let addr = listener.local_addr()?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /       - Service status");
    tracing::info!("  - GET /health - Health check");

    let state = Arc::new(AppState::new(config));
    serve(listener, state, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
