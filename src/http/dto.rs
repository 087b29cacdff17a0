//! Data Transfer Objects for the HTTP API.
//!
//! Student rows serialize directly from [`crate::db::models::Student`];
//! this module holds the inbound payload with its validation rules and
//! the small response bodies that are not student rows.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::db::models::NewStudent;

/// `Json` extractor whose rejection keeps the service's error body
/// shape: a malformed or missing JSON body yields a 400 with
/// `{"error": ...}` instead of axum's plain-text default.
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Request body for creating or updating a student.
///
/// All fields are optional at the wire level so that validation, not
/// deserialization, decides which ones are missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roll: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl StudentPayload {
    /// Check required fields and normalize optional ones.
    ///
    /// `name`, `email`, and `roll` must be present and non-empty; an
    /// empty `grade` or `phone` normalizes to `None`, preserving the
    /// original API's falsy-to-null behavior.
    pub fn validate(self) -> Result<NewStudent, AppError> {
        let (Some(name), Some(email), Some(roll)) = (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.roll),
        ) else {
            return Err(AppError::BadRequest(
                "Name, email, and roll number are required".to_string(),
            ));
        };

        Ok(NewStudent {
            name,
            email,
            roll,
            grade: non_empty(self.grade),
            phone: non_empty(self.phone),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: i64,
}

/// Response for the liveness probe. No store check is involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since process start
    pub uptime: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> StudentPayload {
        StudentPayload {
            name: Some("Alice".to_string()),
            email: Some("a@x.com".to_string()),
            roll: Some("R1".to_string()),
            grade: Some("A".to_string()),
            phone: Some("555-0100".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_full_payload() {
        let new = full_payload().validate().unwrap();
        assert_eq!(new.name, "Alice");
        assert_eq!(new.roll, "R1");
        assert_eq!(new.grade.as_deref(), Some("A"));
    }

    #[test]
    fn test_validate_rejects_missing_required_field() {
        let cases: [fn(&mut StudentPayload); 6] = [
            |p| p.name = None,
            |p| p.email = None,
            |p| p.roll = None,
            |p| p.name = Some(String::new()),
            |p| p.email = Some(String::new()),
            |p| p.roll = Some(String::new()),
        ];
        for strip in cases {
            let mut payload = full_payload();
            strip(&mut payload);
            assert!(payload.validate().is_err());
        }
    }

    #[test]
    fn test_validate_normalizes_empty_optionals_to_null() {
        let mut payload = full_payload();
        payload.grade = Some(String::new());
        payload.phone = None;

        let new = payload.validate().unwrap();
        assert_eq!(new.grade, None);
        assert_eq!(new.phone, None);
    }
}
