//! Handlers for the combined song-points-and-tracks ("sat") views.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use songmap_core::types::DbId;
use songmap_db::models::song_point::SongPointResponse;
use songmap_db::models::track::TrackResponse;
use songmap_db::repositories::{SongPointRepo, TrackRepo};

use crate::error::{validate_payload, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::query::RadiusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Combined view: loose points plus tracks (each with its points).
#[derive(Debug, Serialize)]
pub struct SongPointsAndTracks {
    pub song_points: Vec<SongPointResponse>,
    pub tracks: Vec<TrackResponse>,
}

/// GET /users/{owner_id}/sat
///
/// An owner's loose points plus all of their tracks. Requires any valid
/// token.
pub async fn for_user(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(owner_id): Path<DbId>,
) -> AppResult<Json<DataResponse<SongPointsAndTracks>>> {
    let loose = SongPointRepo::loose_for_owner(&state.pool, owner_id).await?;
    let tracks = TrackRepo::list_for_owner(&state.pool, owner_id).await?;

    Ok(Json(DataResponse {
        data: SongPointsAndTracks {
            song_points: loose.into_iter().map(SongPointResponse::from).collect(),
            tracks: tracks
                .into_iter()
                .map(|(track, points)| TrackResponse::from_parts(track, points))
                .collect(),
        },
    }))
}

/// GET /sat?longitude=&latitude=&radius=&skip=&limit=
///
/// Radius search partitioned into loose points and tracks. The radius query
/// (with pagination) runs first; the page is then split into loose points
/// and track members, and every track referenced by the page is returned in
/// FULL -- including its points outside the radius. That pass-through is
/// intentional: a trail touched by the search area is shown whole.
pub async fn within_radius(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<RadiusParams>,
) -> AppResult<Json<DataResponse<SongPointsAndTracks>>> {
    validate_payload(&params)?;

    let page = SongPointRepo::within_radius(
        &state.pool,
        params.longitude,
        params.latitude,
        params.radius,
        params.skip,
        params.limit,
    )
    .await?;

    let mut loose = Vec::new();
    let mut track_ids: Vec<DbId> = Vec::new();
    for point in page {
        match point.track_id {
            None => loose.push(SongPointResponse::from(point)),
            Some(track_id) => {
                if !track_ids.contains(&track_id) {
                    track_ids.push(track_id);
                }
            }
        }
    }

    let mut tracks = Vec::with_capacity(track_ids.len());
    for track_id in track_ids {
        if let Some((track, points)) = TrackRepo::find_by_id(&state.pool, track_id).await? {
            tracks.push(TrackResponse::from_parts(track, points));
        }
    }

    Ok(Json(DataResponse {
        data: SongPointsAndTracks {
            song_points: loose,
            tracks,
        },
    }))
}
