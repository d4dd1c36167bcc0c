//! Repository for the `songs` table.

use songbook_core::filter::SongFilter;
use songbook_core::pagination::PageRequest;
use songbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::song::{NewSong, Song, UpdateSong};
use crate::query::{build_list_query, QueryArg, SONG_COLUMNS};

/// Provides CRUD operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the assigned id.
    pub async fn create(pool: &PgPool, input: &NewSong) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO songs (group_name, song_title, release_date, text, link) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.group)
        .bind(&input.title)
        .bind(&input.release_date)
        .bind(&input.text)
        .bind(&input.link)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a song by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable field of a song.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            "UPDATE songs SET \
                group_name = $2, \
                song_title = $3, \
                release_date = $4, \
                text = $5, \
                link = $6 \
             WHERE id = $1 \
             RETURNING {SONG_COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .bind(&input.group)
            .bind(&input.title)
            .bind(&input.release_date)
            .bind(&input.text)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Delete a song. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List songs matching `filter`, ordered by id, windowed by `page`.
    pub async fn list(
        pool: &PgPool,
        filter: &SongFilter,
        page: PageRequest,
    ) -> Result<Vec<Song>, sqlx::Error> {
        let built = build_list_query(filter, page);
        tracing::debug!(sql = %built.sql, args = built.args.len(), "Listing songs");

        let mut q = sqlx::query_as::<_, Song>(&built.sql);
        for arg in built.args {
            q = match arg {
                QueryArg::Text(value) => q.bind(value),
                QueryArg::Int(value) => q.bind(value),
            };
        }
        q.fetch_all(pool).await
    }
}
