//! Handlers for `/trips/{trip_id}/points`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::point::{CreatePoint, Point};
use watertrail_db::repositories::PointRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trip_exists, touched};
use crate::state::AppState;

/// GET /api/trips/{trip_id}/points
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<Point>>> {
    let points = PointRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(points))
}

/// POST /api/trips/{trip_id}/points
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreatePoint>,
) -> AppResult<(StatusCode, Json<Point>)> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let input = input.validated()?;
    let point = PointRepo::create(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::ParentMissing { id: trip_id }))?;
    tracing::debug!(trip_id, point_id = point.id, "Point created");
    Ok((StatusCode::CREATED, Json(point)))
}

/// DELETE /api/trips/{trip_id}/points/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = PointRepo::delete(&state.pool, trip_id, id).await?;
    touched(deleted, "Point", id)?;
    Ok(StatusCode::NO_CONTENT)
}
