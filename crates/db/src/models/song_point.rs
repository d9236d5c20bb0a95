//! Song point entity model and DTOs.
//!
//! A song point records one user hearing one song at one place and time.
//! Points optionally belong to a track (`track_id`); a point with no track
//! is "loose".

use serde::{Deserialize, Serialize};
use songmap_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::song::Song;

/// Client payload for one point. The owner and track come from the request
/// context, the geo value is derived server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSongPoint {
    pub song_id: DbId,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    pub time_added: Timestamp,
}

/// A point row joined with its song, flattened via column aliases.
#[derive(Debug, Clone, FromRow)]
pub struct SongPointWithSong {
    pub id: DbId,
    pub owner_id: DbId,
    pub song_id: DbId,
    pub track_id: Option<DbId>,
    pub longitude: f64,
    pub latitude: f64,
    pub geo: String,
    pub time_added: Timestamp,
    pub likes: i32,
    pub created_at: Timestamp,
    pub song_artist: String,
    pub song_title: String,
    pub song_spotify_id: Option<String>,
    pub song_created_at: Timestamp,
}

/// API shape: a point with its song embedded.
#[derive(Debug, Clone, Serialize)]
pub struct SongPointResponse {
    pub id: DbId,
    pub owner_id: DbId,
    pub track_id: Option<DbId>,
    pub longitude: f64,
    pub latitude: f64,
    pub geo: String,
    pub time_added: Timestamp,
    pub likes: i32,
    pub song: Song,
}

impl From<SongPointWithSong> for SongPointResponse {
    fn from(row: SongPointWithSong) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            track_id: row.track_id,
            longitude: row.longitude,
            latitude: row.latitude,
            geo: row.geo,
            time_added: row.time_added,
            likes: row.likes,
            song: Song {
                id: row.song_id,
                artist: row.song_artist,
                title: row.song_title,
                spotify_id: row.song_spotify_id,
                created_at: row.song_created_at,
            },
        }
    }
}
