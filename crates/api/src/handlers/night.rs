//! Handlers for `/trips/{trip_id}/nights`, the per-night camp plan.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::night::{CreateNight, Night, UpdateNight};
use watertrail_db::repositories::NightRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trip_exists, touched};
use crate::state::AppState;

/// GET /api/trips/{trip_id}/nights
///
/// Sorted by night number, then insertion order.
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<Night>>> {
    let items = NightRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(items))
}

/// POST /api/trips/{trip_id}/nights
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateNight>,
) -> AppResult<(StatusCode, Json<Night>)> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let input = input.validated()?;
    let item = NightRepo::create(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::ParentMissing { id: trip_id }))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/trips/{trip_id}/nights/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateNight>,
) -> AppResult<StatusCode> {
    let input = input.validated()?;
    let updated = NightRepo::update(&state.pool, trip_id, id, &input).await?;
    touched(updated, "Night", id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/trips/{trip_id}/nights/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = NightRepo::delete(&state.pool, trip_id, id).await?;
    touched(deleted, "Night", id)?;
    Ok(StatusCode::NO_CONTENT)
}
