//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Instant;

use crate::db::repository::StudentRepository;
use crate::metrics::Metrics;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn StudentRepository>,
    /// Prometheus registry and collectors
    pub metrics: Arc<Metrics>,
    /// Process start, for the health endpoint's uptime field
    pub started_at: Instant,
}

impl AppState {
    pub fn new(repository: Arc<dyn StudentRepository>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics,
            started_at: Instant::now(),
        }
    }
}
