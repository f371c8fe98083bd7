//! Handlers for `/trips/{trip_id}/gear`, the packing list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::gear::{CreateGear, Gear, UpdateGear};
use watertrail_db::repositories::GearRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trip_exists, touched};
use crate::state::AppState;

/// GET /api/trips/{trip_id}/gear
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<Gear>>> {
    let items = GearRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(items))
}

/// POST /api/trips/{trip_id}/gear
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateGear>,
) -> AppResult<(StatusCode, Json<Gear>)> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let input = input.validated()?;
    let item = GearRepo::create(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::ParentMissing { id: trip_id }))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/trips/{trip_id}/gear/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateGear>,
) -> AppResult<StatusCode> {
    let input = input.validated()?;
    let updated = GearRepo::update(&state.pool, trip_id, id, &input).await?;
    touched(updated, "Gear", id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/trips/{trip_id}/gear/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = GearRepo::delete(&state.pool, trip_id, id).await?;
    touched(deleted, "Gear", id)?;
    Ok(StatusCode::NO_CONTENT)
}
