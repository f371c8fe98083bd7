//! Handlers for `/trips/{trip_id}/paths`, the route polyline vertices.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::path::{CreatePath, RoutePath};
use watertrail_db::repositories::PathRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trip_exists, touched};
use crate::state::AppState;

/// GET /api/trips/{trip_id}/paths
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<RoutePath>>> {
    let paths = PathRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(paths))
}

/// POST /api/trips/{trip_id}/paths
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreatePath>,
) -> AppResult<(StatusCode, Json<RoutePath>)> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let path = PathRepo::create(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::ParentMissing { id: trip_id }))?;
    Ok((StatusCode::CREATED, Json(path)))
}

/// DELETE /api/trips/{trip_id}/paths/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = PathRepo::delete(&state.pool, trip_id, id).await?;
    touched(deleted, "Path", id)?;
    Ok(StatusCode::NO_CONTENT)
}
