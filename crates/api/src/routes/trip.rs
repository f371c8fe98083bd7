//! Route definitions for the `/trips` resource and its child collections.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{food, gear, night, path, point, trip};
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{trip_id}                     -> get_by_id
/// DELETE /{trip_id}                     -> delete
///
/// GET    /{trip_id}/points              -> list_by_trip
/// POST   /{trip_id}/points              -> create
/// DELETE /{trip_id}/points/{id}         -> delete
///
/// GET    /{trip_id}/paths               -> list_by_trip
/// POST   /{trip_id}/paths               -> create
/// DELETE /{trip_id}/paths/{id}          -> delete
///
/// GET    /{trip_id}/gear                -> list_by_trip
/// POST   /{trip_id}/gear                -> create
/// PUT    /{trip_id}/gear/{id}           -> update
/// DELETE /{trip_id}/gear/{id}           -> delete
///
/// (food and nights as gear)
/// ```
pub fn router() -> Router<AppState> {
    let point_routes = Router::new()
        .route("/", get(point::list_by_trip).post(point::create))
        .route("/{id}", delete(point::delete));

    let path_routes = Router::new()
        .route("/", get(path::list_by_trip).post(path::create))
        .route("/{id}", delete(path::delete));

    let gear_routes = Router::new()
        .route("/", get(gear::list_by_trip).post(gear::create))
        .route("/{id}", put(gear::update).delete(gear::delete));

    let food_routes = Router::new()
        .route("/", get(food::list_by_trip).post(food::create))
        .route("/{id}", put(food::update).delete(food::delete));

    let night_routes = Router::new()
        .route("/", get(night::list_by_trip).post(night::create))
        .route("/{id}", put(night::update).delete(night::delete));

    Router::new()
        .route("/", get(trip::list).post(trip::create))
        .route("/{trip_id}", get(trip::get_by_id).delete(trip::delete))
        .nest("/{trip_id}/points", point_routes)
        .nest("/{trip_id}/paths", path_routes)
        .nest("/{trip_id}/gear", gear_routes)
        .nest("/{trip_id}/food", food_routes)
        .nest("/{trip_id}/nights", night_routes)
}
