//! Handlers for `/trips/{trip_id}/food`, the food supply.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::food::{CreateFood, Food, UpdateFood};
use watertrail_db::repositories::FoodRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trip_exists, touched};
use crate::state::AppState;

/// GET /api/trips/{trip_id}/food
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<Food>>> {
    let items = FoodRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(items))
}

/// POST /api/trips/{trip_id}/food
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateFood>,
) -> AppResult<(StatusCode, Json<Food>)> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let input = input.validated()?;
    let item = FoodRepo::create(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::ParentMissing { id: trip_id }))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/trips/{trip_id}/food/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateFood>,
) -> AppResult<StatusCode> {
    let input = input.validated()?;
    let updated = FoodRepo::update(&state.pool, trip_id, id, &input).await?;
    touched(updated, "Food", id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/trips/{trip_id}/food/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = FoodRepo::delete(&state.pool, trip_id, id).await?;
    touched(deleted, "Food", id)?;
    Ok(StatusCode::NO_CONTENT)
}
