//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure funnels through
//! [`AppError::into_response`] and leaves the server as a
//! `{ "error": <message>, "code": <CODE> }` JSON body with the matching
//! status. Database errors are classified first so constraint violations
//! surface as client errors instead of opaque 500s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vellum_core::error::CoreError;

/// Error type returned by every handler in this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `vellum_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage error from sqlx, classified at response time.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything that should surface as a sanitized 500. The message is
    /// logged, never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => classify_database_error(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed with an internal error");
                internal_response()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn core_response(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_response()
        }
    }
}

/// Turn a sqlx error into a response triple.
///
/// `RowNotFound` is a plain 404. PostgreSQL constraint violations carry
/// their SQLSTATE: 23505 (unique) on a `uq_`-named constraint becomes a
/// 409, and 23503 (foreign key) a 409 naming the missing reference. The
/// rest is logged and sanitized to a 500.
fn classify_database_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                Some("23503") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Referenced row does not exist: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Unhandled database error");
                    internal_response()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Unhandled database error");
            internal_response()
        }
    }
}

fn internal_response() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
