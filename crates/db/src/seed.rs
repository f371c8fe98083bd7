//! First-run example data.
//!
//! [`seed_if_empty`] inserts one example kayak trip (waypoints, a route
//! polyline, gear, food and nights) when the store has no trips at all, and
//! does nothing otherwise.

use watertrail_core::trip_type::TripType;

use crate::models::food::CreateFood;
use crate::models::gear::CreateGear;
use crate::models::night::CreateNight;
use crate::models::path::CreatePath;
use crate::models::point::CreatePoint;
use crate::models::trip::CreateTrip;
use crate::repositories::{FoodRepo, GearRepo, NightRepo, TripRepo};
use crate::DbPool;

const EXAMPLE_ROUTE: [(f64, f64); 25] = [
    (30.2463, -83.2461),
    (30.2300, -83.2450),
    (30.2100, -83.2400),
    (30.1800, -83.2350),
    (30.1500, -83.2300),
    (30.1272, -83.2255),
    (30.1200, -83.2100),
    (30.1150, -83.2000),
    (30.1100, -83.1850),
    (30.1050, -83.1650),
    (30.1030, -83.1500),
    (30.1024, -83.1383),
    (30.1000, -83.1250),
    (30.0900, -83.1100),
    (30.0800, -83.0900),
    (30.0650, -83.0650),
    (30.0550, -83.0450),
    (30.0450, -83.0300),
    (30.0352, -83.0189),
    (30.0250, -83.0100),
    (30.0150, -83.0000),
    (30.0050, -82.9900),
    (29.9950, -82.9800),
    (29.9850, -82.9700),
    (29.9771, -82.9615),
];

/// (name, quantity, packed)
const EXAMPLE_GEAR: [(&str, i32, bool); 13] = [
    ("Kayak", 1, true),
    ("Paddle", 1, true),
    ("Life Jacket", 1, true),
    ("Tent", 1, false),
    ("Sleeping Bag", 1, false),
    ("Sleeping Pad", 1, false),
    ("Cooking Stove", 1, false),
    ("Fuel", 1, false),
    ("Cookware", 1, false),
    ("Water Filter", 1, false),
    ("First Aid Kit", 1, true),
    ("Headlamp", 1, true),
    ("Dry Bags", 3, false),
];

/// (name, quantity)
const EXAMPLE_FOOD: [(&str, i32); 5] = [
    ("Oatmeal", 2),
    ("Dehydrated Meals", 4),
    ("Energy Bars", 6),
    ("Coffee", 1),
    ("Water", 1),
];

/// Name of the trip inserted by [`seed_if_empty`].
pub const EXAMPLE_TRIP_NAME: &str = "Suwannee River Kayak Adventure";

/// Insert the example trip if, and only if, the store holds no trips.
///
/// The emptiness check and every insert share one transaction. Returns
/// `true` if the example was written.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing = TripRepo::count(&mut *tx).await?;
    if existing > 0 {
        tracing::debug!(existing, "Store already has trips, skipping seed");
        return Ok(false);
    }

    let trip_id = TripRepo::insert(&mut tx, &example_trip()).await?;

    for (name, quantity, packed) in EXAMPLE_GEAR {
        let gear = CreateGear {
            name: name.to_string(),
            quantity,
            packed,
        };
        GearRepo::insert(&mut tx, trip_id, &gear).await?;
    }

    for (name, quantity) in EXAMPLE_FOOD {
        let food = CreateFood {
            name: name.to_string(),
            quantity,
            eaten: false,
        };
        FoodRepo::insert(&mut tx, trip_id, &food).await?;
    }

    for night in example_nights() {
        NightRepo::insert(&mut tx, trip_id, &night).await?;
    }

    tx.commit().await?;
    tracing::info!(trip_id, "Seeded example trip");
    Ok(true)
}

fn example_trip() -> CreateTrip {
    CreateTrip {
        name: EXAMPLE_TRIP_NAME.to_string(),
        description: Some("A scenic kayak route along the Suwannee River.".to_string()),
        trip_type: TripType::Kayak,
        points: vec![
            campsite(
                "Lafayette Blue Springs State Park (Night 1, Mile 103.3)",
                30.1272,
                -83.2255,
            ),
            campsite(
                "Peacock Slough River Camp (Night 2, Mile 95.8)",
                30.1024,
                -83.1383,
            ),
            CreatePoint {
                name: "Patrician Oaks (Take-Out, Mile 79.0)".to_string(),
                latitude: 29.9771,
                longitude: -82.9615,
                icon: Some("fa-anchor".to_string()),
                color: Some("red".to_string()),
            },
        ],
        paths: EXAMPLE_ROUTE
            .iter()
            .map(|&(latitude, longitude)| CreatePath {
                latitude,
                longitude,
            })
            .collect(),
    }
}

fn campsite(name: &str, latitude: f64, longitude: f64) -> CreatePoint {
    CreatePoint {
        name: name.to_string(),
        latitude,
        longitude,
        icon: Some("fa-campground".to_string()),
        color: Some("green".to_string()),
    }
}

fn example_nights() -> [CreateNight; 2] {
    [
        CreateNight {
            night_number: 1,
            campsite: Some("Lafayette Blue Springs State Park".to_string()),
            notes: Some("Arrive before 5pm to set up camp.".to_string()),
        },
        CreateNight {
            night_number: 2,
            campsite: Some("Peacock Slough River Camp".to_string()),
            notes: Some("Primitive campsite, no facilities.".to_string()),
        },
    ]
}
