//! Named map waypoints (campsites, put-ins, take-outs).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_core::validation::{optional_text, required_text, MAX_NAME_LEN, MAX_TAG_LEN};

/// A row from the `points` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// DTO for placing a new point. Points cannot be edited once placed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoint {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl CreatePoint {
    /// Trim and check fields. Coordinates are accepted as given.
    pub fn validated(self) -> Result<Self, CoreError> {
        Ok(Self {
            name: required_text("name", &self.name, MAX_NAME_LEN)?,
            latitude: self.latitude,
            longitude: self.longitude,
            icon: optional_text("icon", self.icon.as_deref(), Some(MAX_TAG_LEN))?,
            color: optional_text("color", self.color.as_deref(), Some(MAX_TAG_LEN))?,
        })
    }
}
