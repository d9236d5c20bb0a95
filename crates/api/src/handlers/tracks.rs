//! Handlers for the `/users/{owner_id}/tracks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use songmap_core::types::DbId;
use songmap_db::models::song_point::CreateSongPoint;
use songmap_db::models::track::{CreateTrack, TrackResponse};
use songmap_db::repositories::TrackRepo;

use crate::error::{validate_payload, AppResult};
use crate::middleware::auth::{ensure_owner, CurrentUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users/{owner_id}/tracks`: the track plus its
/// points, created as one unit.
#[derive(Debug, Deserialize)]
pub struct CreateTrackRequest {
    pub track: CreateTrack,
    #[serde(default)]
    pub song_points: Vec<CreateSongPoint>,
}

/// POST /users/{owner_id}/tracks
///
/// Create a track together with its points in one transaction. The owner
/// must be the calling user. A failure on any point leaves no track behind.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(owner_id): Path<DbId>,
    Json(input): Json<CreateTrackRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_owner(owner_id, &user.0)?;
    validate_payload(&input.track)?;
    for point in &input.song_points {
        validate_payload(point)?;
    }

    let (track, points) =
        TrackRepo::create_with_points(&state.pool, &input.track, &input.song_points, owner_id)
            .await?;

    tracing::info!(track_id = track.id, points = points.len(), "created track");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TrackResponse::from_parts(track, points),
        }),
    ))
}

/// GET /users/{owner_id}/tracks
///
/// List an owner's tracks (each with its points). Requires any valid token;
/// tracks are publicly readable.
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(owner_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TrackResponse>>>> {
    let tracks = TrackRepo::list_for_owner(&state.pool, owner_id).await?;

    Ok(Json(DataResponse {
        data: tracks
            .into_iter()
            .map(|(track, points)| TrackResponse::from_parts(track, points))
            .collect(),
    }))
}
