//! HTTP-level integration tests for the child collections under a trip:
//! points, paths, gear, food and nights.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, create_trip, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn new_trip(pool: &SqlitePool, name: &str) -> i64 {
    create_trip(pool, json!({"name": name, "type": "General"})).await
}

/// POST a child record and return its id.
async fn create_child(pool: &SqlitePool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Parent checks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_under_missing_trip_returns_trip_not_found(pool: SqlitePool) {
    let cases = [
        ("points", json!({"name": "Camp", "latitude": 1.0, "longitude": 2.0})),
        ("paths", json!({"latitude": 1.0, "longitude": 2.0})),
        ("gear", json!({"name": "Tent"})),
        ("food", json!({"name": "Rice"})),
        ("nights", json!({"nightNumber": 1})),
    ];

    for (kind, body) in cases {
        let response = post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/trips/4242/{kind}"),
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{kind}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "Trip not found", "{kind}");
        assert_eq!(json["code"], "TRIP_NOT_FOUND", "{kind}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_trip_wins_over_invalid_body(pool: SqlitePool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/trips/4242/gear",
        json!({"name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "TRIP_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_under_missing_trip_is_empty(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/api/trips/4242/nights").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Points / paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_point_create_list_delete(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Points").await;
    let uri = format!("/api/trips/{trip_id}/points");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"name": " Camp A ", "latitude": 30.1, "longitude": -83.2, "color": "green"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let point = body_json(response).await;
    assert_eq!(point["name"], "Camp A");
    assert_eq!(point["color"], "green");
    assert_eq!(point["icon"], serde_json::Value::Null);
    let point_id = point["id"].as_i64().unwrap();

    let listed = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;
    assert_eq!(listed, json!([point]));

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("{uri}/{point_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(listed, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_point_without_name_returns_400(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Points").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/trips/{trip_id}/points"),
        json!({"latitude": 30.1, "longitude": -83.2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_omitted_numbers_default_to_zero(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Defaults").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/trips/{trip_id}/points"),
        json!({"name": "Null Island"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let point = body_json(response).await;
    assert_eq!(point["latitude"], 0.0);
    assert_eq!(point["longitude"], 0.0);

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/trips/{trip_id}/paths"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["latitude"], 0.0);

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/trips/{trip_id}/nights"),
        json!({"campsite": "Unnumbered"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let night = body_json(response).await;
    assert_eq!(night["nightNumber"], 0);
    assert_eq!(night["campsite"], "Unnumbered");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paths_keep_insertion_order(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Route").await;
    let uri = format!("/api/trips/{trip_id}/paths");
    for lat in [3.0, 1.0, 2.0] {
        create_child(&pool, &uri, json!({"latitude": lat, "longitude": 0.5})).await;
    }

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    let lats: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["latitude"].as_f64().unwrap())
        .collect();
    assert_eq!(lats, [3.0, 1.0, 2.0]);
    assert_eq!(listed[0]["tripId"], trip_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_points_and_paths_have_no_update(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Fixed").await;
    let path_id = create_child(
        &pool,
        &format!("/api/trips/{trip_id}/paths"),
        json!({"latitude": 1.0, "longitude": 1.0}),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/trips/{trip_id}/paths/{path_id}"),
        json!({"latitude": 2.0, "longitude": 2.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Gear / food
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gear_defaults_and_update(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Pack").await;
    let uri = format!("/api/trips/{trip_id}/gear");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"name": "Headlamp"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let gear = body_json(response).await;
    assert_eq!(gear["quantity"], 1);
    assert_eq!(gear["packed"], false);
    let gear_id = gear["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("{uri}/{gear_id}"),
        json!({"name": "Headlamps", "quantity": 2, "packed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(
        listed,
        json!([{"id": gear_id, "tripId": trip_id, "name": "Headlamps", "quantity": 2, "packed": true}])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gear_update_with_blank_name_returns_400(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Pack").await;
    let uri = format!("/api/trips/{trip_id}/gear");
    let gear_id = create_child(&pool, &uri, json!({"name": "Stove"})).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("{uri}/{gear_id}"),
        json!({"name": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_food_mark_eaten(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Meals").await;
    let uri = format!("/api/trips/{trip_id}/food");
    let food_id = create_child(&pool, &uri, json!({"name": "Oatmeal", "quantity": 2})).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("{uri}/{food_id}"),
        json!({"name": "Oatmeal", "quantity": 1, "eaten": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(listed[0]["quantity"], 1);
    assert_eq!(listed[0]["eaten"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_record_returns_empty_404(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Meals").await;
    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/trips/{trip_id}/food/777"),
        json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Nights
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nights_listed_by_number(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Nights").await;
    let uri = format!("/api/trips/{trip_id}/nights");
    for (n, site) in [(2, "Second"), (3, "Third"), (1, "First")] {
        create_child(&pool, &uri, json!({"nightNumber": n, "campsite": site})).await;
    }

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    let sites: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["campsite"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(sites, ["First", "Second", "Third"]);
    assert_eq!(listed[0]["nightNumber"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_night_update_reorders(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Nights").await;
    let uri = format!("/api/trips/{trip_id}/nights");
    let early = create_child(&pool, &uri, json!({"nightNumber": 1, "campsite": "Early"})).await;
    create_child(&pool, &uri, json!({"nightNumber": 2, "campsite": "Late"})).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("{uri}/{early}"),
        json!({"nightNumber": 5, "campsite": "Early", "notes": "Pushed back"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(listed[0]["campsite"], "Late");
    assert_eq!(listed[1]["campsite"], "Early");
    assert_eq!(listed[1]["notes"], "Pushed back");
}

// ---------------------------------------------------------------------------
// Trip scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_child_not_reachable_through_other_trip(pool: SqlitePool) {
    let owner = new_trip(&pool, "Owner").await;
    let other = new_trip(&pool, "Other").await;
    let gear_id = create_child(
        &pool,
        &format!("/api/trips/{owner}/gear"),
        json!({"name": "Compass"}),
    )
    .await;
    let night_id = create_child(
        &pool,
        &format!("/api/trips/{owner}/nights"),
        json!({"nightNumber": 1}),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/trips/{other}/gear/{gear_id}"),
        json!({"name": "Stolen"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/trips/{other}/nights/{night_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let trip = body_json(
        get(common::build_test_app(pool), &format!("/api/trips/{owner}")).await,
    )
    .await;
    assert_eq!(trip["gear"][0]["name"], "Compass");
    assert_eq!(trip["nights"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_children_appear_in_trip_aggregate(pool: SqlitePool) {
    let trip_id = new_trip(&pool, "Full").await;
    let base = format!("/api/trips/{trip_id}");
    create_child(&pool, &format!("{base}/gear"), json!({"name": "Tent"})).await;
    create_child(&pool, &format!("{base}/food"), json!({"name": "Rice", "quantity": 3})).await;
    create_child(&pool, &format!("{base}/nights"), json!({"nightNumber": 1})).await;

    let trip = body_json(get(common::build_test_app(pool), &base).await).await;
    assert_eq!(trip["gear"].as_array().unwrap().len(), 1);
    assert_eq!(trip["food"][0]["quantity"], 3);
    assert_eq!(trip["nights"][0]["nightNumber"], 1);
    assert_eq!(trip["nights"][0]["campsite"], serde_json::Value::Null);
}
