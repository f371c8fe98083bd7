//! Domain layer for the WaterTrail trip planner.
//!
//! No I/O lives here: only identifiers, the domain error type, the trip
//! type enum and the field rules shared by the repository and HTTP layers.

pub mod error;
pub mod trip_type;
pub mod types;
pub mod validation;
