pub mod food;
pub mod gear;
pub mod night;
pub mod path;
pub mod point;
pub mod trip;

use watertrail_core::error::CoreError;
use watertrail_core::types::DbId;
use watertrail_db::repositories::TripRepo;
use watertrail_db::DbPool;

use crate::error::{AppError, AppResult};

/// Verify that the trip addressed by a child route exists.
///
/// Child creates call this before validating the body, so a missing trip
/// wins over a bad payload.
pub async fn ensure_trip_exists(pool: &DbPool, trip_id: DbId) -> AppResult<()> {
    if TripRepo::exists(pool, trip_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::ParentMissing { id: trip_id }))
    }
}

/// Map a repository's "was a row touched" flag onto 204 / 404.
pub(crate) fn touched(found: bool, entity: &'static str, id: DbId) -> AppResult<()> {
    if found {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound { entity, id }))
    }
}
