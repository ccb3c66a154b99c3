use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod rest;
mod storage;

use config::Config;
use domain::DashboardService;
use rest::AppState;
use storage::SalesDataRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("Loading sales data from {}", config.data_path.display());
    let dataset = SalesDataRepository::new(&config.data_path)
        .load_dataset()
        .with_context(|| {
            format!(
                "failed to load sales data from {}",
                config.data_path.display()
            )
        })?;
    let dataset = Arc::new(dataset);

    // Set up our application state; the dataset stays immutable from here on
    let state = AppState::new(DashboardService::new(dataset));

    // CORS setup so a separately served frontend dev build can make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    // API routes plus the built frontend as static fallback
    let app = Router::new()
        .nest("/api", rest::api_router(state))
        .fallback_service(ServeDir::new(&config.frontend_dist))
        .layer(cors);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
