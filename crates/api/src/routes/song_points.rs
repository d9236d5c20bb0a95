//! Route definitions for song points.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::song_points;
use crate::state::AppState;

/// Routes nested at `/songpoints`.
///
/// ```text
/// GET / -> within_radius
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(song_points::within_radius))
}

/// Routes nested at `/users/{id}/songpoints`.
///
/// ```text
/// POST / -> create_for_owner (owner only)
/// ```
pub fn owner_router() -> Router<AppState> {
    Router::new().route("/", post(song_points::create_for_owner))
}
