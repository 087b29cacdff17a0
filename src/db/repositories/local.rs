//! In-memory repository implementation.
//!
//! Mirrors the SQLite backend's semantics, including `roll` uniqueness,
//! descending id ordering, and the not-found/fault distinction, so tests
//! and local development can run without a database file.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::db::models::{NewStudent, Student};
use crate::db::repository::{RepositoryError, RepositoryResult, StudentRepository};

#[derive(Default)]
struct LocalState {
    rows: BTreeMap<i64, Student>,
    next_id: i64,
}

/// In-memory student store for unit testing and local development.
#[derive(Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for LocalRepository {
    async fn list(&self) -> RepositoryResult<Vec<Student>> {
        let state = self.state.read();
        Ok(state.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i64) -> RepositoryResult<Student> {
        let state = self.state.read();
        state.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, new: NewStudent) -> RepositoryResult<i64> {
        let mut state = self.state.write();
        if state.rows.values().any(|s| s.roll == new.roll) {
            return Err(RepositoryError::Conflict);
        }
        state.next_id += 1;
        let id = state.next_id;
        let mut student = new.into_student(id);
        student.created_at = Some(Utc::now().naive_utc());
        state.rows.insert(id, student);
        Ok(id)
    }

    async fn update(&self, id: i64, new: NewStudent) -> RepositoryResult<()> {
        let mut state = self.state.write();
        // Row absence wins over a roll collision, as in SQL where an
        // UPDATE on a missing row trips no constraint.
        if !state.rows.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if state.rows.values().any(|s| s.roll == new.roll && s.id != id) {
            return Err(RepositoryError::Conflict);
        }
        let row = state.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        let created_at = row.created_at;
        let mut replacement = new.into_student(id);
        replacement.created_at = created_at;
        *row = replacement;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut state = self.state.write();
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let state = self.state.read();
        Ok(state.rows.len() as i64)
    }
}
