//! Collaborator seams for the catalog service and their production
//! implementations.

use async_trait::async_trait;
use songbook_core::filter::SongFilter;
use songbook_core::pagination::PageRequest;
use songbook_core::types::DbId;
use songbook_db::models::song::{NewSong, Song, UpdateSong};
use songbook_db::repositories::SongRepo;
use songbook_db::DbPool;
use songbook_enrichment::{EnrichmentClient, EnrichmentError, SongDetail};

/// Durable song storage keyed by id.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Persist a new song and return its assigned id.
    async fn create(&self, song: &NewSong) -> Result<DbId, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error>;

    /// Full replace. `None` when no song has this id.
    async fn update(&self, id: DbId, song: &UpdateSong) -> Result<Option<Song>, sqlx::Error>;

    /// `true` if a song was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn list(&self, filter: &SongFilter, page: PageRequest) -> Result<Vec<Song>, sqlx::Error>;

    /// Check the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Source of release date, lyrics and link for a new song.
#[async_trait]
pub trait SongEnricher: Send + Sync {
    async fn song_detail(&self, group: &str, title: &str) -> Result<SongDetail, EnrichmentError>;
}

/// [`SongStore`] backed by the Postgres `songs` table.
#[derive(Clone)]
pub struct PgSongStore {
    pool: DbPool,
}

impl PgSongStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for PgSongStore {
    async fn create(&self, song: &NewSong) -> Result<DbId, sqlx::Error> {
        SongRepo::create(&self.pool, song).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        SongRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: DbId, song: &UpdateSong) -> Result<Option<Song>, sqlx::Error> {
        SongRepo::update(&self.pool, id, song).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        SongRepo::delete(&self.pool, id).await
    }

    async fn list(&self, filter: &SongFilter, page: PageRequest) -> Result<Vec<Song>, sqlx::Error> {
        SongRepo::list(&self.pool, filter, page).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        songbook_db::health_check(&self.pool).await
    }
}

#[async_trait]
impl SongEnricher for EnrichmentClient {
    async fn song_detail(&self, group: &str, title: &str) -> Result<SongDetail, EnrichmentError> {
        self.fetch_song_detail(group, title).await
    }
}
