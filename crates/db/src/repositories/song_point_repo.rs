//! Repository for the `song_points` table.
//!
//! All reads join the owning song so handlers can embed it without a second
//! round trip. The radius query prefilters with a coordinate bounding box in
//! SQL and applies the exact great-circle filter in Rust; skip/limit
//! pagination runs after the distance filter.

use geo_types::Point;
use songmap_core::geo;
use songmap_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::song_point::{CreateSongPoint, SongPointWithSong};

/// Joined column list shared across queries (point columns plus aliased song
/// columns). Also used by the track repository.
pub(crate) const JOINED_COLUMNS: &str = "sp.id, sp.owner_id, sp.song_id, sp.track_id, sp.longitude, \
     sp.latitude, sp.geo, sp.time_added, sp.likes, sp.created_at, \
     s.artist AS song_artist, s.title AS song_title, \
     s.spotify_id AS song_spotify_id, s.created_at AS song_created_at";

/// Provides create and query operations for song points.
pub struct SongPointRepo;

impl SongPointRepo {
    /// Insert one point on an existing connection or transaction.
    ///
    /// The stored geo value is derived from the supplied coordinates here;
    /// clients never provide it. A dangling `song_id` or `track_id`
    /// surfaces as a foreign-key violation.
    pub async fn create_in(
        conn: &mut PgConnection,
        input: &CreateSongPoint,
        owner_id: DbId,
        track_id: Option<DbId>,
    ) -> Result<SongPointWithSong, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                INSERT INTO song_points \
                    (owner_id, song_id, track_id, longitude, latitude, geo, time_added) \
                VALUES ($1, $2, $3, $4, $5, $6, $7) \
                RETURNING id, owner_id, song_id, track_id, longitude, latitude, geo, \
                          time_added, likes, created_at \
             ) \
             SELECT {JOINED_COLUMNS} FROM inserted sp JOIN songs s ON s.id = sp.song_id"
        );
        sqlx::query_as::<_, SongPointWithSong>(&query)
            .bind(owner_id)
            .bind(input.song_id)
            .bind(track_id)
            .bind(input.longitude)
            .bind(input.latitude)
            .bind(geo::wkt_point(input.longitude, input.latitude))
            .bind(input.time_added)
            .fetch_one(conn)
            .await
    }

    /// Insert one point for the given owner.
    pub async fn create_for_owner(
        pool: &PgPool,
        input: &CreateSongPoint,
        owner_id: DbId,
        track_id: Option<DbId>,
    ) -> Result<SongPointWithSong, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::create_in(&mut conn, input, owner_id, track_id).await
    }

    /// Insert a batch of loose points for the given owner in one
    /// transaction.
    ///
    /// All-or-nothing: a failed insert rolls back the whole batch, so a
    /// rejected trail never persists partially.
    pub async fn create_many_for_owner(
        pool: &PgPool,
        inputs: &[CreateSongPoint],
        owner_id: DbId,
    ) -> Result<Vec<SongPointWithSong>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut points = Vec::with_capacity(inputs.len());
        for input in inputs {
            points.push(Self::create_in(&mut tx, input, owner_id, None).await?);
        }
        tx.commit().await?;

        Ok(points)
    }

    /// Points whose great-circle distance from the center is strictly less
    /// than `radius_m` meters, in natural (`id`) order, with `skip`/`limit`
    /// applied after the distance filter.
    pub async fn within_radius(
        pool: &PgPool,
        longitude: f64,
        latitude: f64,
        radius_m: f64,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<SongPointWithSong>, sqlx::Error> {
        let center = Point::new(longitude, latitude);
        let bbox = geo::bounding_box(center, radius_m);

        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM song_points sp \
             JOIN songs s ON s.id = sp.song_id \
             WHERE sp.latitude BETWEEN $1 AND $2 \
               AND sp.longitude BETWEEN $3 AND $4 \
             ORDER BY sp.id"
        );
        let candidates = sqlx::query_as::<_, SongPointWithSong>(&query)
            .bind(bbox.min_latitude)
            .bind(bbox.max_latitude)
            .bind(bbox.min_longitude)
            .bind(bbox.max_longitude)
            .fetch_all(pool)
            .await?;

        let points = candidates
            .into_iter()
            .filter(|p| geo::distance_m(center, Point::new(p.longitude, p.latitude)) < radius_m)
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok(points)
    }

    /// The owner's loose points (no track), in natural order.
    pub async fn loose_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<SongPointWithSong>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM song_points sp \
             JOIN songs s ON s.id = sp.song_id \
             WHERE sp.owner_id = $1 AND sp.track_id IS NULL \
             ORDER BY sp.id"
        );
        sqlx::query_as::<_, SongPointWithSong>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// All points belonging to one track, in natural order.
    pub async fn for_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<SongPointWithSong>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM song_points sp \
             JOIN songs s ON s.id = sp.song_id \
             WHERE sp.track_id = $1 \
             ORDER BY sp.id"
        );
        sqlx::query_as::<_, SongPointWithSong>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
