//! Repository for the `points` table.

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::point::{CreatePoint, Point};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, name, latitude, longitude, icon, color";

/// Provides list/create/delete for map points. Points are never updated.
pub struct PointRepo;

impl PointRepo {
    /// List a trip's points in placement order. Unknown trips yield an empty list.
    pub async fn list_by_trip<'e, E>(executor: E, trip_id: DbId) -> Result<Vec<Point>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM points WHERE trip_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Point>(&query)
            .bind(trip_id)
            .fetch_all(executor)
            .await
    }

    /// Place a point under a trip.
    ///
    /// The parent check and the insert are a single statement: `None` means
    /// the trip does not exist and nothing was written.
    pub async fn create(
        pool: &DbPool,
        trip_id: DbId,
        input: &CreatePoint,
    ) -> Result<Option<Point>, sqlx::Error> {
        let query = format!(
            "INSERT INTO points (trip_id, name, latitude, longitude, icon, color) \
             SELECT ?1, ?2, ?3, ?4, ?5, ?6 \
             WHERE EXISTS (SELECT 1 FROM trips WHERE id = ?1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Point>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Insert without a parent check. For use inside a transaction that
    /// has just created the trip.
    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        trip_id: DbId,
        input: &CreatePoint,
    ) -> Result<Point, sqlx::Error> {
        let query = format!(
            "INSERT INTO points (trip_id, name, latitude, longitude, icon, color) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Point>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_one(conn)
            .await
    }

    /// Delete a point belonging to `trip_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM points WHERE id = ?1 AND trip_id = ?2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
