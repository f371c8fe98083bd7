//! Handlers for the `/trips` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::models::trip::{CreateTrip, Trip, TripSummary};
use watertrail_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::touched;
use crate::state::AppState;

/// GET /api/trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TripSummary>>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(trips))
}

/// GET /api/trips/{trip_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }))?;
    Ok(Json(trip))
}

/// POST /api/trips
///
/// Creates the trip together with any initial points and paths.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let input = input.validated()?;
    let trip = TripRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// DELETE /api/trips/{trip_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TripRepo::delete(&state.pool, trip_id).await?;
    touched(deleted, "Trip", trip_id)?;
    Ok(StatusCode::NO_CONTENT)
}
