//! Repository for the `tracks` table.

use std::collections::HashMap;

use songmap_core::types::DbId;
use sqlx::PgPool;

use crate::models::song_point::{CreateSongPoint, SongPointWithSong};
use crate::models::track::{CreateTrack, Track};
use crate::repositories::SongPointRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, created_at";

/// Provides create and query operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Create a track and all of its points as one transaction.
    ///
    /// A failure part-way (e.g. a dangling song_id on the third point)
    /// rolls back everything, so no partial track persists. The returned
    /// record is assembled from the inserted rows; nothing is re-read after
    /// commit.
    pub async fn create_with_points(
        pool: &PgPool,
        track: &CreateTrack,
        points: &[CreateSongPoint],
        owner_id: DbId,
    ) -> Result<(Track, Vec<SongPointWithSong>), sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (owner_id, name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let track_row = sqlx::query_as::<_, Track>(&query)
            .bind(owner_id)
            .bind(&track.name)
            .fetch_one(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(points.len());
        for point in points {
            inserted
                .push(SongPointRepo::create_in(&mut tx, point, owner_id, Some(track_row.id)).await?);
        }
        tx.commit().await?;

        Ok((track_row, inserted))
    }

    /// Find one track with all of its points.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<(Track, Vec<SongPointWithSong>)>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        let Some(track) = sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let points = SongPointRepo::for_track(pool, id).await?;
        Ok(Some((track, points)))
    }

    /// All of one owner's tracks, each carrying its points, in natural
    /// order.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<(Track, Vec<SongPointWithSong>)>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE owner_id = $1 ORDER BY id");
        let tracks = sqlx::query_as::<_, Track>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;

        // One query for all of the owner's tracked points, grouped in Rust.
        let points_query = format!(
            "SELECT {joined} FROM song_points sp \
             JOIN songs s ON s.id = sp.song_id \
             WHERE sp.owner_id = $1 AND sp.track_id IS NOT NULL \
             ORDER BY sp.id",
            joined = crate::repositories::song_point_repo::JOINED_COLUMNS
        );
        let points = sqlx::query_as::<_, SongPointWithSong>(&points_query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;

        let mut by_track: HashMap<DbId, Vec<SongPointWithSong>> = HashMap::new();
        for point in points {
            if let Some(track_id) = point.track_id {
                by_track.entry(track_id).or_default().push(point);
            }
        }

        Ok(tracks
            .into_iter()
            .map(|track| {
                let points = by_track.remove(&track.id).unwrap_or_default();
                (track, points)
            })
            .collect())
    }
}
