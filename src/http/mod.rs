//! HTTP server module.
//!
//! This module provides the axum-based HTTP layer that exposes the
//! student repository as a REST API: request parsing and validation,
//! JSON serialization, CORS, per-request metrics, and the mapping of
//! repository errors to HTTP status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
