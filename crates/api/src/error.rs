use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use watertrail_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store failures.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `watertrail_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Missing trips and child records answer with a bare 404.
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Not found");
                    return StatusCode::NOT_FOUND.into_response();
                }
                CoreError::ParentMissing { .. } => trip_not_found(),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn trip_not_found() -> (StatusCode, &'static str, String) {
    (
        StatusCode::NOT_FOUND,
        "TRIP_NOT_FOUND",
        "Trip not found".to_string(),
    )
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations map to 404 `TRIP_NOT_FOUND`: the only foreign
///   keys are child `trip_id` columns, so the parent trip vanished between
///   the existence check and the insert.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            tracing::warn!(error = %db_err, "Foreign key violation");
            trip_not_found()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
