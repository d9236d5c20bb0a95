//! Track entity model and DTOs.
//!
//! A track is an owner-scoped trail of song points, ordered by creation.
//! Tracks are created together with their points in one request.

use serde::{Deserialize, Serialize};
use songmap_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::song_point::{SongPointResponse, SongPointWithSong};

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new track. Points travel separately in the same
/// request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrack {
    #[validate(length(max = 256))]
    pub name: Option<String>,
}

/// API shape: a track carrying all of its points (each with its song).
#[derive(Debug, Clone, Serialize)]
pub struct TrackResponse {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub song_points: Vec<SongPointResponse>,
}

impl TrackResponse {
    pub fn from_parts(track: Track, points: Vec<SongPointWithSong>) -> Self {
        Self {
            id: track.id,
            owner_id: track.owner_id,
            name: track.name,
            created_at: track.created_at,
            song_points: points.into_iter().map(SongPointResponse::from).collect(),
        }
    }
}
