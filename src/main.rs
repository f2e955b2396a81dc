//! Contestboard - Application Entry Point
//!
//! This is the main entry point for the Contestboard server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use contestboard::{
    config::{CONFIG, LogFormat},
    create_router, db,
    state::AppState,
    storage::CloudinaryUploader,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&CONFIG.server.rust_log));

    let registry = tracing_subscriber::registry().with(filter);
    match CONFIG.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Contestboard server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::connect(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Asset host client; missing credentials only fail individual uploads
    let uploader = CloudinaryUploader::new(&CONFIG.uploads)?;

    let state = AppState::new(db_pool, Arc::new(uploader), CONFIG.clone());
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
