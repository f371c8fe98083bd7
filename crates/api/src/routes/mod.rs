pub mod health;
pub mod trip;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /trips                                 list, create
/// /trips/{trip_id}                       get, delete
/// /trips/{trip_id}/points                list, create
/// /trips/{trip_id}/points/{id}           delete
/// /trips/{trip_id}/paths                 list, create
/// /trips/{trip_id}/paths/{id}            delete
/// /trips/{trip_id}/gear                  list, create
/// /trips/{trip_id}/gear/{id}             update, delete
/// /trips/{trip_id}/food                  list, create
/// /trips/{trip_id}/food/{id}             update, delete
/// /trips/{trip_id}/nights                list, create
/// /trips/{trip_id}/nights/{id}           update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/trips", trip::router())
}
