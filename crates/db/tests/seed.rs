//! Tests for the first-run seed procedure.

use sqlx::SqlitePool;
use watertrail_core::trip_type::TripType;
use watertrail_db::models::trip::CreateTrip;
use watertrail_db::repositories::TripRepo;
use watertrail_db::seed::{seed_if_empty, EXAMPLE_TRIP_NAME};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_inserts_example_trip(pool: SqlitePool) {
    assert!(seed_if_empty(&pool).await.unwrap());

    let trips = TripRepo::list(&pool).await.unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].name, EXAMPLE_TRIP_NAME);
    assert_eq!(trips[0].trip_type, TripType::Kayak);

    let trip = TripRepo::find_by_id(&pool, trips[0].id).await.unwrap().unwrap();
    assert_eq!(trip.points.len(), 3);
    assert_eq!(trip.paths.len(), 25);
    assert_eq!(trip.gear.len(), 13);
    assert_eq!(trip.food.len(), 5);
    assert_eq!(trip.nights.len(), 2);

    let dry_bags = trip.gear.iter().find(|g| g.name == "Dry Bags").unwrap();
    assert_eq!(dry_bags.quantity, 3);
    assert!(!dry_bags.packed);
    assert_eq!(trip.nights[0].night_number, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_twice_yields_one_trip(pool: SqlitePool) {
    assert!(seed_if_empty(&pool).await.unwrap());
    assert!(!seed_if_empty(&pool).await.unwrap());
    assert_eq!(TripRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_skipped_when_any_trip_exists(pool: SqlitePool) {
    let input = CreateTrip {
        name: "Mine".into(),
        description: None,
        trip_type: TripType::Hiking,
        points: Vec::new(),
        paths: Vec::new(),
    };
    TripRepo::create(&pool, &input).await.unwrap();

    assert!(!seed_if_empty(&pool).await.unwrap());
    let trips = TripRepo::list(&pool).await.unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].name, "Mine");
}
