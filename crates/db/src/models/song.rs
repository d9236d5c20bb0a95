//! Song entity model and DTOs.

use serde::{Deserialize, Serialize};
use songmap_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `songs` table. Songs are immutable after creation and are
/// shared reference data, not owned by any user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub artist: String,
    pub title: String,
    /// External catalog id (e.g. a Spotify track id). Not unique; inserts
    /// perform no dedup.
    pub spotify_id: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new song.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSong {
    #[validate(length(min = 1, max = 512))]
    pub artist: String,
    #[validate(length(min = 1, max = 512))]
    pub title: String,
    pub spotify_id: Option<String>,
}
