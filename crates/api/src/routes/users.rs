//! Route definitions for the `/users` resource and its sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{song_points, users};
use crate::routes::{sat, song_points as song_point_routes, tracks};
use crate::state::AppState;

/// Routes nested at `/users`.
///
/// Every user-scoped subtree hangs off the same `{id}` parameter so the
/// route tree keeps one param name at that position.
///
/// ```text
/// POST /new               -> register (public)
/// GET  /me                -> me
/// POST /me/songpoints     -> create points for self
/// GET  /{id}              -> get
/// POST /{id}/songpoints   -> create points (owner only)
/// GET  /{id}/tracks       -> list owner's tracks
/// POST /{id}/tracks       -> create track + points (owner only)
/// GET  /{id}/sat          -> owner's tracks + loose points
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(users::register))
        .route("/me", get(users::me))
        .route("/me/songpoints", post(song_points::create_for_me))
        .route("/{id}", get(users::get))
        .nest("/{id}/songpoints", song_point_routes::owner_router())
        .nest("/{id}/tracks", tracks::router())
        .nest("/{id}/sat", sat::user_router())
}
