//! Repository for the `songs` table.

use songmap_core::types::DbId;
use sqlx::PgPool;

use crate::models::song::{CreateSong, Song};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist, title, spotify_id, created_at";

/// Provides create and lookup operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the created row.
    ///
    /// Inserts are unconditional: two creates with the same spotify_id
    /// produce two rows.
    pub async fn create(pool: &PgPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (artist, title, spotify_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.artist)
            .bind(&input.title)
            .bind(&input.spotify_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of songs in one transaction.
    ///
    /// All-or-nothing: any failed insert rolls back the whole batch.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateSong],
    ) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (artist, title, spotify_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut songs = Vec::with_capacity(inputs.len());
        for input in inputs {
            let song = sqlx::query_as::<_, Song>(&query)
                .bind(&input.artist)
                .bind(&input.title)
                .bind(&input.spotify_id)
                .fetch_one(&mut *tx)
                .await?;
            songs.push(song);
        }
        tx.commit().await?;

        Ok(songs)
    }

    /// Find a song by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a song by external catalog id.
    ///
    /// spotify_id is not unique; the earliest matching row wins.
    pub async fn find_by_spotify_id(
        pool: &PgPool,
        spotify_id: &str,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM songs WHERE spotify_id = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Song>(&query)
            .bind(spotify_id)
            .fetch_optional(pool)
            .await
    }
}
