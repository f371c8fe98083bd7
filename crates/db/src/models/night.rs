//! Overnight stops. Night numbers are not unique within a trip.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_core::validation::{optional_text, MAX_CAMPSITE_LEN};

/// A row from the `nights` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Night {
    pub id: DbId,
    pub trip_id: DbId,
    pub night_number: i32,
    pub campsite: Option<String>,
    pub notes: Option<String>,
}

/// DTO for creating a night.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNight {
    #[serde(default)]
    pub night_number: i32,
    pub campsite: Option<String>,
    pub notes: Option<String>,
}

/// PUT replaces every mutable field, so it shares the create shape.
pub type UpdateNight = CreateNight;

impl CreateNight {
    pub fn validated(self) -> Result<Self, CoreError> {
        Ok(Self {
            night_number: self.night_number,
            campsite: optional_text("campsite", self.campsite.as_deref(), Some(MAX_CAMPSITE_LEN))?,
            notes: optional_text("notes", self.notes.as_deref(), None)?,
        })
    }
}
