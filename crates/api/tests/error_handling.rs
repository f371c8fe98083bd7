//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use watertrail_api::error::AppError;
use watertrail_core::error::CoreError;

/// Convert an `AppError` into its status code and raw body.
async fn error_to_parts(err: AppError) -> (StatusCode, Vec<u8>) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = error_to_parts(err).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_empty_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Trip",
        id: 42,
    });

    let (status, body) = error_to_parts(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn parent_missing_returns_trip_not_found() {
    let err = AppError::Core(CoreError::ParentMissing { id: 7 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "TRIP_NOT_FOUND");
    assert_eq!(json["error"], "Trip not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be empty");
}

#[tokio::test]
async fn sqlx_row_not_found_returns_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_sqlx_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolClosed);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_key_violation_maps_to_trip_not_found(pool: sqlx::SqlitePool) {
    let err = sqlx::query("INSERT INTO gear (trip_id, name) VALUES (999, 'Orphan')")
        .execute(&pool)
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "TRIP_NOT_FOUND");
}

#[test]
fn core_errors_convert_with_question_mark() {
    fn fails() -> Result<(), AppError> {
        Err(CoreError::Validation("bad".into()))?
    }
    assert_matches::assert_matches!(fails(), Err(AppError::Core(CoreError::Validation(_))));
}
