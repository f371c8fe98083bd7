//! Trip aggregate: the `trips` row plus its five child collections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watertrail_core::error::CoreError;
use watertrail_core::trip_type::TripType;
use watertrail_core::types::DbId;
use watertrail_core::validation::{optional_text, required_text, MAX_NAME_LEN};

use crate::models::food::Food;
use crate::models::gear::Gear;
use crate::models::night::Night;
use crate::models::path::{CreatePath, RoutePath};
use crate::models::point::{CreatePoint, Point};

/// A row from the `trips` table, without children. Used for listings.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub trip_type: TripType,
}

/// A trip with every child collection loaded.
///
/// Nights are ordered by night number; all other collections keep
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub trip_type: TripType,
    pub points: Vec<Point>,
    pub paths: Vec<RoutePath>,
    pub gear: Vec<Gear>,
    pub food: Vec<Food>,
    pub nights: Vec<Night>,
}

impl Trip {
    /// A trip with no children yet.
    pub fn from_summary(summary: TripSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
            trip_type: summary.trip_type,
            points: Vec::new(),
            paths: Vec::new(),
            gear: Vec::new(),
            food: Vec::new(),
            nights: Vec::new(),
        }
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            trip_type: self.trip_type,
        }
    }
}

/// DTO for creating a trip, optionally with its initial map data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub trip_type: TripType,
    #[serde(default)]
    pub points: Vec<CreatePoint>,
    #[serde(default)]
    pub paths: Vec<CreatePath>,
}

impl CreateTrip {
    /// Trim and check the trip fields and every initial point.
    pub fn validated(self) -> Result<Self, CoreError> {
        let points = self
            .points
            .into_iter()
            .map(CreatePoint::validated)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: required_text("name", &self.name, MAX_NAME_LEN)?,
            description: optional_text("description", self.description.as_deref(), None)?,
            trip_type: self.trip_type,
            points,
            paths: self.paths,
        })
    }
}
