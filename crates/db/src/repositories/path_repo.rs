//! Repository for the `paths` table (route polyline vertices).

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::path::{CreatePath, RoutePath};
use crate::DbPool;

const COLUMNS: &str = "id, trip_id, latitude, longitude";

pub struct PathRepo;

impl PathRepo {
    /// List a trip's route vertices in drawing order.
    pub async fn list_by_trip<'e, E>(
        executor: E,
        trip_id: DbId,
    ) -> Result<Vec<RoutePath>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM paths WHERE trip_id = ?1 ORDER BY id");
        sqlx::query_as::<_, RoutePath>(&query)
            .bind(trip_id)
            .fetch_all(executor)
            .await
    }

    /// Append a vertex to a trip's route. `None` if the trip does not exist.
    pub async fn create(
        pool: &DbPool,
        trip_id: DbId,
        input: &CreatePath,
    ) -> Result<Option<RoutePath>, sqlx::Error> {
        let query = format!(
            "INSERT INTO paths (trip_id, latitude, longitude) \
             SELECT ?1, ?2, ?3 \
             WHERE EXISTS (SELECT 1 FROM trips WHERE id = ?1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoutePath>(&query)
            .bind(trip_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        trip_id: DbId,
        input: &CreatePath,
    ) -> Result<RoutePath, sqlx::Error> {
        let query = format!(
            "INSERT INTO paths (trip_id, latitude, longitude) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoutePath>(&query)
            .bind(trip_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(conn)
            .await
    }

    /// Delete a vertex belonging to `trip_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM paths WHERE id = ?1 AND trip_id = ?2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
