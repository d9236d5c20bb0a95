//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the per-test database provided by `#[sqlx::test]`,
//! and offers small request/response helpers driven through
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use songmap_api::auth::jwt::JwtConfig;
use songmap_api::config::ServerConfig;
use songmap_api::router::build_app_router;
use songmap_api::state::AppState;

/// Password used for every test account.
pub const TEST_PASSWORD: &str = "listening-by-the-river";

/// Build a test `ServerConfig` with a fixed JWT secret so tokens are
/// verifiable across requests without touching the environment.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a JSON POST request without credentials.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a JSON POST request with a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a form-encoded POST request (used by `/token`).
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register a user via the API and log them in. Returns `(user_id, token)`.
pub async fn register_and_login(app: &Router, username: &str) -> (i64, String) {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": TEST_PASSWORD,
    });
    let response = post_json(app.clone(), "/users/new", body).await;
    assert_eq!(response.status(), 201, "registration should succeed");
    let user = body_json(response).await;
    let user_id = user["data"]["id"].as_i64().expect("user id");

    let response = post_form(
        app.clone(),
        "/token",
        &[("username", username), ("password", TEST_PASSWORD)],
    )
    .await;
    assert_eq!(response.status(), 200, "login should succeed");
    let token = body_json(response).await;
    let access_token = token["access_token"].as_str().expect("access token");

    (user_id, access_token.to_string())
}

/// Create one song via the API, returning its id.
pub async fn create_song(app: &Router, token: &str, artist: &str, title: &str) -> i64 {
    let body = serde_json::json!([{ "artist": artist, "title": title, "spotify_id": null }]);
    let response = post_json_auth(app.clone(), "/songs", body, token).await;
    assert_eq!(response.status(), 201, "song creation should succeed");
    let json = body_json(response).await;
    json["data"][0]["id"].as_i64().expect("song id")
}
