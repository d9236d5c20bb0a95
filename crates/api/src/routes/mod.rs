pub mod health;
pub mod sat;
pub mod song_points;
pub mod songs;
pub mod tracks;
pub mod users;

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /token                     bearer-token issuance (public, form-encoded)
///
/// /users/new                 register (public)
/// /users/me                  calling user
/// /users/me/songpoints       create points for self
/// /users/{id}                user by id
/// /users/{id}/songpoints     create points (owner only)
/// /users/{id}/tracks         create track + points (owner only), list
/// /users/{id}/sat            owner's tracks + loose points
///
/// /songs                     bulk-create, fetch by id (?id=)
/// /songs/spotify             fetch by external id (?spotify_id=)
///
/// /songpoints                radius search
/// /sat                       radius search, tracks + loose points
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Token issuance (public, form-encoded credentials).
        .route("/token", post(auth::token))
        // Registration, user lookups, and user-scoped sub-resources.
        .nest("/users", users::router())
        // Song catalog.
        .nest("/songs", songs::router())
        // Global radius search over song points.
        .nest("/songpoints", song_points::router())
        // Radius search partitioned into loose points and tracks.
        .nest("/sat", sat::router())
}
