//! # Studentdesk Backend
//!
//! A small REST service for managing student records, backed by a
//! single-table SQLite store. The crate exposes a repository abstraction
//! over the persistence layer and an axum-based HTTP API on top of it,
//! plus a Prometheus metrics registry observed by the HTTP layer.
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`db`]: Repository trait, data models, and the SQLite / in-memory
//!   repository implementations
//! - [`http`]: Axum-based HTTP server, request handlers, and error mapping
//! - [`metrics`]: Prometheus counters, histogram, and gauge exposed at
//!   `/metrics`

pub mod db;
pub mod http;
pub mod metrics;
