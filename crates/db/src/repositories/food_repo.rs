//! Repository for the `food` table.

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::food::{CreateFood, Food, UpdateFood};
use crate::DbPool;

const COLUMNS: &str = "id, trip_id, name, quantity, eaten";

/// Provides CRUD operations for a trip's provisions.
pub struct FoodRepo;

impl FoodRepo {
    pub async fn list_by_trip<'e, E>(executor: E, trip_id: DbId) -> Result<Vec<Food>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM food WHERE trip_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Food>(&query)
            .bind(trip_id)
            .fetch_all(executor)
            .await
    }

    /// Add a food item. `None` if the trip does not exist.
    pub async fn create(
        pool: &DbPool,
        trip_id: DbId,
        input: &CreateFood,
    ) -> Result<Option<Food>, sqlx::Error> {
        let query = format!(
            "INSERT INTO food (trip_id, name, quantity, eaten) \
             SELECT ?1, ?2, ?3, ?4 \
             WHERE EXISTS (SELECT 1 FROM trips WHERE id = ?1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Food>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.eaten)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        trip_id: DbId,
        input: &CreateFood,
    ) -> Result<Food, sqlx::Error> {
        let query = format!(
            "INSERT INTO food (trip_id, name, quantity, eaten) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Food>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.eaten)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every mutable field. Returns `false` if no row with `id`
    /// exists under `trip_id`.
    pub async fn update(
        pool: &DbPool,
        trip_id: DbId,
        id: DbId,
        input: &UpdateFood,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE food SET name = ?3, quantity = ?4, eaten = ?5 \
             WHERE id = ?1 AND trip_id = ?2",
        )
        .bind(id)
        .bind(trip_id)
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.eaten)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &DbPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM food WHERE id = ?1 AND trip_id = ?2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
