//! Repository for the `trips` table and the trip aggregate.
//!
//! Loading a trip reads the root row and all five child collections inside
//! one transaction so callers never observe a half-written aggregate.
//! Creation writes the root row and its initial points and paths in one
//! transaction as well.

use sqlx::sqlite::SqliteExecutor;
use sqlx::SqliteConnection;
use watertrail_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, TripSummary};
use crate::repositories::{FoodRepo, GearRepo, NightRepo, PathRepo, PointRepo};
use crate::DbPool;

/// Column list for the root row.
const SUMMARY_COLUMNS: &str = "id, name, description, type";

/// Provides aggregate-level operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// List every trip without children, oldest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<TripSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM trips ORDER BY id");
        sqlx::query_as::<_, TripSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Load a trip with all child collections from a single snapshot.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let trip = Self::load(&mut tx, id).await?;
        tx.commit().await?;
        Ok(trip)
    }

    /// Whether a trip with this id exists.
    pub async fn exists<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM trips WHERE id = ?1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of trips in the store.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trips")
            .fetch_one(executor)
            .await
    }

    /// Create a trip with its initial points and paths, atomically.
    ///
    /// `input` is expected to have passed [`CreateTrip::validated`]. Returns
    /// the fully loaded trip, exactly as [`TripRepo::find_by_id`] would.
    pub async fn create(pool: &DbPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = Self::insert(&mut tx, input).await?;
        let trip = Self::load(&mut tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        tracing::info!(
            trip_id = id,
            points = trip.points.len(),
            paths = trip.paths.len(),
            "Trip created",
        );
        Ok(trip)
    }

    /// Delete a trip; its children go with it via `ON DELETE CASCADE`.
    /// Returns `true` if a trip existed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(trip_id = id, "Trip deleted");
        }
        Ok(deleted)
    }

    /// Insert the root row and the initial points/paths on an open
    /// connection or transaction. Returns the new trip id.
    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        input: &CreateTrip,
    ) -> Result<DbId, sqlx::Error> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO trips (name, description, type) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.trip_type.as_str())
        .fetch_one(&mut *conn)
        .await?;

        for point in &input.points {
            PointRepo::insert(&mut *conn, id, point).await?;
        }
        for path in &input.paths {
            PathRepo::insert(&mut *conn, id, path).await?;
        }

        Ok(id)
    }

    async fn load(conn: &mut SqliteConnection, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM trips WHERE id = ?1");
        let summary = sqlx::query_as::<_, TripSummary>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        let Some(summary) = summary else {
            return Ok(None);
        };

        let mut trip = Trip::from_summary(summary);
        trip.points = PointRepo::list_by_trip(&mut *conn, id).await?;
        trip.paths = PathRepo::list_by_trip(&mut *conn, id).await?;
        trip.gear = GearRepo::list_by_trip(&mut *conn, id).await?;
        trip.food = FoodRepo::list_by_trip(&mut *conn, id).await?;
        trip.nights = NightRepo::list_by_trip(&mut *conn, id).await?;
        Ok(Some(trip))
    }
}
