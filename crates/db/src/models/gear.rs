//! Packing list entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_core::validation::{required_text, DEFAULT_QUANTITY, MAX_NAME_LEN};

/// A row from the `gear` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub quantity: i32,
    pub packed: bool,
}

/// DTO for creating a gear item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGear {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub packed: bool,
}

/// PUT replaces every mutable field, so it shares the create shape.
pub type UpdateGear = CreateGear;

fn default_quantity() -> i32 {
    DEFAULT_QUANTITY
}

impl CreateGear {
    pub fn validated(self) -> Result<Self, CoreError> {
        Ok(Self {
            name: required_text("name", &self.name, MAX_NAME_LEN)?,
            ..self
        })
    }
}
