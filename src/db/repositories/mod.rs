//! Repository implementations module.
//!
//! This module contains the implementations of the `StudentRepository`
//! trait:
//! - `sqlite`: on-disk SQLite store used in production
//! - `local`: in-memory implementation for unit testing and local
//!   development

pub mod local;
pub mod sqlite;

pub use local::LocalRepository;
pub use sqlite::SqliteRepository;
