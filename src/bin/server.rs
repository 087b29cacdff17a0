//! Studentdesk HTTP Server Binary
//!
//! This is the main entry point for the student records REST API server.
//! It opens the SQLite store (creating the schema if needed), sets up the
//! HTTP router, and starts serving requests.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `STUDENTS_DB_PATH`: SQLite file location (default: data/students.db)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use studentdesk::db::{DbConfig, SqliteRepository, StudentRepository};
use studentdesk::http::{create_router, AppState};
use studentdesk::metrics::Metrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Studentdesk HTTP Server");

    // Open the store once; schema creation is idempotent. Any failure
    // here aborts startup.
    let config = DbConfig::from_env();
    let repository = Arc::new(
        SqliteRepository::open(&config.path)
            .map_err(|e| anyhow::anyhow!("failed to open student store: {}", e))?,
    ) as Arc<dyn StudentRepository>;
    info!(path = %config.path.display(), "Student store ready");

    let metrics = Arc::new(Metrics::new()?);

    // Create application state and router
    let state = AppState::new(repository, metrics);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
