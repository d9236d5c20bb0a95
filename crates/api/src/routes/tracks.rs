//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Routes nested at `/users/{id}/tracks`.
///
/// ```text
/// GET  / -> list
/// POST / -> create (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(tracks::list).post(tracks::create))
}
