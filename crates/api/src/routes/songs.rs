//! Route definitions for the `/songs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Routes nested at `/songs`.
///
/// ```text
/// GET  /         -> get (?id=)
/// POST /         -> create (bulk)
/// GET  /spotify  -> get_by_spotify_id (?spotify_id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(songs::get).post(songs::create))
        .route("/spotify", get(songs::get_by_spotify_id))
}
