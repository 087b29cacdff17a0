//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint and delegates persistence to
//! the repository behind the shared state. Required-field validation
//! runs before any store call.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{DeleteResponse, HealthResponse, JsonPayload, StudentPayload};
use super::error::AppError;
use super::state::AppState;
use crate::db::models::Student;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse the `{id}` path segment explicitly rather than letting an
/// untyped value reach the store.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid student id".to_string()))
}

/// GET /students
///
/// List all students, newest first. An empty table yields an empty
/// array, not an error.
pub async fn list_students(State(state): State<AppState>) -> HandlerResult<Vec<Student>> {
    let students = state.repository.list().await?;
    Ok(Json(students))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Student> {
    let id = parse_id(&id)?;
    let student = state.repository.get(id).await?;
    Ok(Json(student))
}

/// POST /students
///
/// Create a new student. The store assigns `id` and `created_at`; the
/// response echoes the submitted fields with the new id.
pub async fn create_student(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<StudentPayload>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let new = payload.validate()?;
    let id = state.repository.insert(new.clone()).await?;
    Ok((StatusCode::CREATED, Json(new.into_student(id))))
}

/// PUT /students/{id}
///
/// Replace all mutable fields of one student as a unit. Partial updates
/// are not supported.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload<StudentPayload>,
) -> HandlerResult<Student> {
    let id = parse_id(&id)?;
    let new = payload.validate()?;
    state.repository.update(id, new.clone()).await?;
    Ok(Json(new.into_student(id)))
}

/// DELETE /students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DeleteResponse> {
    let id = parse_id(&id)?;
    state.repository.delete(id).await?;
    Ok(Json(DeleteResponse { deleted: true, id }))
}

/// GET /health
///
/// Liveness probe; reports process uptime and does not touch the store.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /metrics
///
/// Prometheus text exposition of all registered collectors. The student
/// row count gauge is refreshed from the store on each scrape.
pub async fn metrics_snapshot(State(state): State<AppState>) -> Result<Response, AppError> {
    let count = state.repository.count().await?;
    state.metrics.set_students_total(count);

    let body = state
        .metrics
        .render()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}
