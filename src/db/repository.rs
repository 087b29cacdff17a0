//! Repository trait and error types for student storage.
//!
//! The trait is the seam between the HTTP layer and the storage backend.
//! Implementations must distinguish "row absent" (`NotFound`) from a
//! raised storage error (`Store`), and report a `roll` uniqueness
//! violation as `Conflict` rather than an opaque fault.

use async_trait::async_trait;

use super::models::{NewStudent, Student};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// No row exists for the requested id.
    #[error("student not found")]
    NotFound,

    /// A write would violate the uniqueness constraint on `roll`.
    #[error("roll number already exists")]
    Conflict,

    /// Any other storage-layer failure. The message carries the
    /// underlying driver error text.
    #[error("store fault: {0}")]
    Store(String),
}

/// Abstract interface over the student store.
///
/// Every method maps to a single storage statement; there are no
/// cross-operation transactions and no retries. The handle is shared
/// process-wide as `Arc<dyn StudentRepository>`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch all students, newest `id` first.
    async fn list(&self) -> RepositoryResult<Vec<Student>>;

    /// Fetch one student by id.
    async fn get(&self, id: i64) -> RepositoryResult<Student>;

    /// Insert a new student; the store assigns `id` and `created_at`.
    /// Returns the assigned id.
    async fn insert(&self, new: NewStudent) -> RepositoryResult<i64>;

    /// Replace all mutable fields of the row matching `id` as a unit.
    async fn update(&self, id: i64, new: NewStudent) -> RepositoryResult<()>;

    /// Hard-delete the row matching `id`.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;

    /// Current row count, read for the metrics gauge on each scrape.
    async fn count(&self) -> RepositoryResult<i64>;
}
