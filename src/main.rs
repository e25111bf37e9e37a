// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    routing::{delete, get, put},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::image_service::DashImageService;
use crate::application::quiet_hours::run_quiet_hours;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::file_store::FileImageStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{delete_dashboard, health_check, put_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let style = Arc::new(app_config.render_style()?);

    // Create image store (infrastructure layer)
    let store = Arc::new(FileImageStore::new(app_config.output.dest.clone()));

    // Create services (application layer)
    let image_service = DashImageService::new(style, store);

    if let Some(quiet_hours) = app_config.quiet_hours()? {
        tokio::spawn(run_quiet_hours(image_service.clone(), quiet_hours));
    }

    let state = Arc::new(AppState { image_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", put(put_dashboard))
        .route("/:module", delete(delete_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.addr.parse()?;
    tracing::info!("Starting photo-dash service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
