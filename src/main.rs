// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use product_catalog::app::build_app;
use product_catalog::config::AppConfig;
use product_catalog::database;
use product_catalog::mappers::product::ProductMapper;
use product_catalog::services::product::ProductService;
use product_catalog::state::AppState;
use product_catalog::stores::{InMemoryProductStore, PgProductStore, ProductStore};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    // Pick the product store
    let store: Arc<dyn ProductStore> = match &config.database_url {
        Some(url) => match database::create_pool(url, config.max_connections).await {
            Ok(pool) => Arc::new(PgProductStore::new(pool)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create database pool");
                return;
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            Arc::new(InMemoryProductStore::new())
        }
    };

    // Wire collaborators once
    let mapper = ProductMapper::new();
    let app_state = AppState::new(ProductService::new(store, mapper), mapper);
    let app = build_app(app_state);

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutting down");
}
