//! Route polyline vertices. A trip's path is its rows in insertion order.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watertrail_core::types::DbId;

/// A row from the `paths` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePath {
    pub id: DbId,
    pub trip_id: DbId,
    pub latitude: f64,
    pub longitude: f64,
}

/// DTO for appending a vertex to a trip's route. Omitted coordinates are 0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreatePath {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}
