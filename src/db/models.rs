//! Data models for the student store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted student row.
///
/// `id` is assigned by the store on insert and never changes; `created_at`
/// reflects insertion time only. `created_at` is optional so that create
/// and update responses, which echo submitted fields without re-reading
/// the row, serialize without the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Unique enrollment identifier, distinct from the numeric `id`.
    pub roll: String,
    pub grade: Option<String>,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Validated mutable fields for an insert or full-row update.
///
/// Construction goes through the HTTP payload validation, so `name`,
/// `email`, and `roll` are guaranteed non-empty and `grade`/`phone` are
/// already normalized (empty string becomes `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub roll: String,
    pub grade: Option<String>,
    pub phone: Option<String>,
}

impl NewStudent {
    /// Build the row a successful write is reported as: submitted fields
    /// plus the row id, without a timestamp.
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            roll: self.roll,
            grade: self.grade,
            phone: self.phone,
            created_at: None,
        }
    }
}
