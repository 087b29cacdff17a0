//! Database module for student record storage.
//!
//! This module provides abstractions for database operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/) - handlers and error mapping        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │  SqliteRepository (on-disk)  │
//!     │  LocalRepository (in-memory) │
//!     └──────────────────────────────┘
//! ```
//!
//! The SQLite backend is the production store; the in-memory backend
//! mirrors its semantics (including `roll` uniqueness) for tests and
//! local development.

pub mod config;
pub mod models;
pub mod repositories;
pub mod repository;

pub use config::DbConfig;
pub use models::{NewStudent, Student};
pub use repositories::{LocalRepository, SqliteRepository};
pub use repository::{RepositoryError, RepositoryResult, StudentRepository};
