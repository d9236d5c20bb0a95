//! Handlers for the `/songs` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use songmap_core::error::CoreError;
use songmap_core::types::DbId;
use songmap_db::models::song::{CreateSong, Song};
use songmap_db::repositories::SongRepo;

use crate::error::{validate_payload, AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /songs`.
#[derive(Debug, Deserialize)]
pub struct SongByIdParams {
    pub id: DbId,
}

/// Query parameters for `GET /songs/spotify`.
#[derive(Debug, Deserialize)]
pub struct SongBySpotifyParams {
    pub spotify_id: String,
}

/// POST /songs
///
/// Bulk-create songs from a JSON array. Requires any valid token. The batch
/// is all-or-nothing; no dedup by spotify_id is performed.
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<Vec<CreateSong>>,
) -> AppResult<impl IntoResponse> {
    for song in &input {
        validate_payload(song)?;
    }

    let songs = SongRepo::create_many(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: songs })))
}

/// GET /songs?id=
///
/// Fetch one song by internal id.
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<SongByIdParams>,
) -> AppResult<Json<DataResponse<Song>>> {
    let song = SongRepo::find_by_id(&state.pool, params.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Song",
            id: params.id,
        }))?;

    Ok(Json(DataResponse { data: song }))
}

/// GET /songs/spotify?spotify_id=
///
/// Fetch one song by external catalog id.
pub async fn get_by_spotify_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<SongBySpotifyParams>,
) -> AppResult<Json<DataResponse<Song>>> {
    let song = SongRepo::find_by_spotify_id(&state.pool, &params.spotify_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Song",
                key: "spotify_id",
                value: params.spotify_id.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: song }))
}
