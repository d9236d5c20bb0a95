//! HTTP-level integration tests for song point creation and radius search.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;

/// A point payload at the given coordinates.
fn point(song_id: i64, longitude: f64, latitude: f64) -> serde_json::Value {
    serde_json::json!({
        "song_id": song_id,
        "longitude": longitude,
        "latitude": latitude,
        "time_added": "2026-05-01T12:00:00Z",
    })
}

/// Creating points for oneself stores them with the derived geo value.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_points_for_me(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, token) = common::register_and_login(&app, "walker").await;
    let song_id = common::create_song(&app, &token, "Boards of Canada", "Dayvan Cowboy").await;

    let body = serde_json::json!([point(song_id, 14.4208, 50.0875)]);
    let response = post_json_auth(app, "/users/me/songpoints", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let created = &json["data"][0];
    assert_eq!(created["owner_id"], user_id);
    assert_eq!(created["longitude"], 14.4208);
    assert_eq!(created["latitude"], 50.0875);
    // Derived geo value always mirrors the supplied coordinates exactly.
    assert_eq!(created["geo"], "POINT(14.4208 50.0875)");
    assert!(created["track_id"].is_null());
    assert_eq!(created["song"]["title"], "Dayvan Cowboy");
}

/// The owner-addressed route accepts the owner's own id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_points_for_owner(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, token) = common::register_and_login(&app, "owner").await;
    let song_id = common::create_song(&app, &token, "Moderat", "A New Error").await;

    let body = serde_json::json!([point(song_id, 13.4050, 52.5200)]);
    let response =
        post_json_auth(app, &format!("/users/{user_id}/songpoints"), body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

/// A valid token for a DIFFERENT user is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_points_owner_mismatch_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (victim_id, victim_token) = common::register_and_login(&app, "victim").await;
    let (_, intruder_token) = common::register_and_login(&app, "intruder").await;
    let song_id = common::create_song(&app, &victim_token, "Burial", "Archangel").await;

    let body = serde_json::json!([point(song_id, 0.0, 0.0)]);
    let response = post_json_auth(
        app,
        &format!("/users/{victim_id}/songpoints"),
        body,
        &intruder_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A dangling song id rolls back the whole batch.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_points_batch_is_atomic(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = common::register_and_login(&app, "batcher").await;
    let song_id = common::create_song(&app, &token, "Aphex Twin", "Rhubarb").await;

    let body = serde_json::json!([
        point(song_id, 1.0, 1.0),
        point(999_999, 2.0, 2.0), // dangling song id
    ]);
    let response = post_json_auth(app.clone(), "/users/me/songpoints", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The first point must not have survived the rollback.
    let response = get_auth(
        app,
        "/songpoints?longitude=1.0&latitude=1.0&radius=1000",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// Out-of-range coordinates are rejected with 422.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_point_bad_coordinates_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = common::register_and_login(&app, "edgecase").await;
    let song_id = common::create_song(&app, &token, "Autechre", "Bike").await;

    let body = serde_json::json!([point(song_id, 181.0, 0.0)]);
    let response = post_json_auth(app.clone(), "/users/me/songpoints", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = serde_json::json!([point(song_id, 0.0, -90.5)]);
    let response = post_json_auth(app, "/users/me/songpoints", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Radius search includes points under the radius and excludes the rest.
///
/// Center (0,0) with radius 50 m: a point 0.0001 deg of latitude away
/// (~11 m) is in; a point at (1,1) (~157 km) is out.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_radius_search_filters_by_distance(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = common::register_and_login(&app, "mapper").await;
    let song_id = common::create_song(&app, &token, "Four Tet", "Two Thousand and Seventeen").await;

    let body = serde_json::json!([
        point(song_id, 0.0, 0.0001),
        point(song_id, 1.0, 1.0),
    ]);
    let response = post_json_auth(app.clone(), "/users/me/songpoints", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        app,
        "/songpoints?longitude=0.0&latitude=0.0&radius=50",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let points = json["data"].as_array().expect("array of points");
    assert_eq!(points.len(), 1, "only the ~11 m point is within 50 m");
    assert_eq!(points[0]["latitude"], 0.0001);
}

/// skip/limit paginate after the distance filter, in natural order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_radius_search_pagination(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = common::register_and_login(&app, "paginator").await;
    let song_id = common::create_song(&app, &token, "Caribou", "Odessa").await;

    // Three near points interleaved with two far ones.
    let body = serde_json::json!([
        point(song_id, 0.0, 0.00001),
        point(song_id, 3.0, 3.0),
        point(song_id, 0.0, 0.00002),
        point(song_id, 4.0, 4.0),
        point(song_id, 0.0, 0.00003),
    ]);
    let response = post_json_auth(app.clone(), "/users/me/songpoints", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        app,
        "/songpoints?longitude=0.0&latitude=0.0&radius=50&skip=1&limit=1",
        &token,
    )
    .await;

    let json = body_json(response).await;
    let points = json["data"].as_array().expect("array of points");
    assert_eq!(points.len(), 1);
    // Far points never consume skip/limit slots.
    assert_eq!(points[0]["latitude"], 0.00002);
}

/// The radius search itself requires a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_radius_search_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/songpoints?longitude=0.0&latitude=0.0").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
