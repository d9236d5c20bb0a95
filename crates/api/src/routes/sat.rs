//! Route definitions for the combined song-points-and-tracks views.

use axum::routing::get;
use axum::Router;

use crate::handlers::sat;
use crate::state::AppState;

/// Routes nested at `/sat`.
///
/// ```text
/// GET / -> within_radius
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sat::within_radius))
}

/// Routes nested at `/users/{id}/sat`.
///
/// ```text
/// GET / -> for_user
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/", get(sat::for_user))
}
