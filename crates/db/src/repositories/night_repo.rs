//! Repository for the `nights` table.

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::night::{CreateNight, Night, UpdateNight};
use crate::DbPool;

const COLUMNS: &str = "id, trip_id, night_number, campsite, notes";

/// Provides CRUD operations for a trip's overnight stops.
pub struct NightRepo;

impl NightRepo {
    /// List a trip's nights by night number, ties broken by insertion order.
    pub async fn list_by_trip<'e, E>(executor: E, trip_id: DbId) -> Result<Vec<Night>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM nights WHERE trip_id = ?1 ORDER BY night_number, id"
        );
        sqlx::query_as::<_, Night>(&query)
            .bind(trip_id)
            .fetch_all(executor)
            .await
    }

    /// Add a night. `None` if the trip does not exist.
    pub async fn create(
        pool: &DbPool,
        trip_id: DbId,
        input: &CreateNight,
    ) -> Result<Option<Night>, sqlx::Error> {
        let query = format!(
            "INSERT INTO nights (trip_id, night_number, campsite, notes) \
             SELECT ?1, ?2, ?3, ?4 \
             WHERE EXISTS (SELECT 1 FROM trips WHERE id = ?1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Night>(&query)
            .bind(trip_id)
            .bind(input.night_number)
            .bind(&input.campsite)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        trip_id: DbId,
        input: &CreateNight,
    ) -> Result<Night, sqlx::Error> {
        let query = format!(
            "INSERT INTO nights (trip_id, night_number, campsite, notes) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Night>(&query)
            .bind(trip_id)
            .bind(input.night_number)
            .bind(&input.campsite)
            .bind(&input.notes)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every mutable field. Returns `false` if no row with `id`
    /// exists under `trip_id`.
    pub async fn update(
        pool: &DbPool,
        trip_id: DbId,
        id: DbId,
        input: &UpdateNight,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE nights SET night_number = ?3, campsite = ?4, notes = ?5 \
             WHERE id = ?1 AND trip_id = ?2",
        )
        .bind(id)
        .bind(trip_id)
        .bind(input.night_number)
        .bind(&input.campsite)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &DbPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM nights WHERE id = ?1 AND trip_id = ?2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
