//! Repository for the `gear` table.

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::gear::{CreateGear, Gear, UpdateGear};
use crate::DbPool;

const COLUMNS: &str = "id, trip_id, name, quantity, packed";

/// Provides CRUD operations for a trip's packing list.
pub struct GearRepo;

impl GearRepo {
    /// List a trip's gear in insertion order.
    pub async fn list_by_trip<'e, E>(executor: E, trip_id: DbId) -> Result<Vec<Gear>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM gear WHERE trip_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Gear>(&query)
            .bind(trip_id)
            .fetch_all(executor)
            .await
    }

    /// Add a gear item. `None` if the trip does not exist.
    pub async fn create(
        pool: &DbPool,
        trip_id: DbId,
        input: &CreateGear,
    ) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!(
            "INSERT INTO gear (trip_id, name, quantity, packed) \
             SELECT ?1, ?2, ?3, ?4 \
             WHERE EXISTS (SELECT 1 FROM trips WHERE id = ?1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gear>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.packed)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        trip_id: DbId,
        input: &CreateGear,
    ) -> Result<Gear, sqlx::Error> {
        let query = format!(
            "INSERT INTO gear (trip_id, name, quantity, packed) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gear>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.packed)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every mutable field. Returns `false` if no row with `id`
    /// exists under `trip_id`.
    pub async fn update(
        pool: &DbPool,
        trip_id: DbId,
        id: DbId,
        input: &UpdateGear,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE gear SET name = ?3, quantity = ?4, packed = ?5 \
             WHERE id = ?1 AND trip_id = ?2",
        )
        .bind(id)
        .bind(trip_id)
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.packed)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a gear item belonging to `trip_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gear WHERE id = ?1 AND trip_id = ?2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
