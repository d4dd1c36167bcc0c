use std::sync::Arc;

use songbook_core::error::CoreError;
use songbook_core::filter::SongFilter;
use songbook_core::pagination::PageRequest;
use songbook_core::types::DbId;
use songbook_core::validation::{require_non_blank, validate_id, validate_release_date};
use songbook_core::verses::{paginate_verses, verse_count, VersePage};
use songbook_db::models::song::{CreateSong, NewSong, Song, UpdateSong};

use crate::error::CatalogResult;
use crate::ports::{SongEnricher, SongStore};

const ENTITY: &str = "Song";

/// Song catalog use cases. Stateless apart from its collaborators, so one
/// instance is shared across all requests.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn SongStore>,
    enricher: Arc<dyn SongEnricher>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn SongStore>, enricher: Arc<dyn SongEnricher>) -> Self {
        Self { store, enricher }
    }

    /// List songs matching the raw `key=value` filter params.
    ///
    /// Unknown filter keys and negative pagination values are rejected
    /// before the store is queried.
    pub async fn list_songs<I, K, V>(
        &self,
        filter: I,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> CatalogResult<Vec<Song>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let filter = SongFilter::from_params(filter)?;
        let page = PageRequest::from_params(limit, offset)?;
        self.list_filtered(&filter, page).await
    }

    /// List songs for an already validated filter.
    pub async fn list_filtered(
        &self,
        filter: &SongFilter,
        page: PageRequest,
    ) -> CatalogResult<Vec<Song>> {
        let songs = self.store.list(filter, page).await?;
        tracing::debug!(
            filters = filter.len(),
            limit = page.limit(),
            offset = page.offset(),
            returned = songs.len(),
            "Listed songs"
        );
        Ok(songs)
    }

    /// Enrich and persist a new song.
    ///
    /// Enrichment is mandatory: if the provider fails, nothing is stored.
    pub async fn create_song(&self, input: CreateSong) -> CatalogResult<Song> {
        require_non_blank("group", &input.group)?;
        require_non_blank("song", &input.title)?;

        let detail = self
            .enricher
            .song_detail(&input.group, &input.title)
            .await
            .inspect_err(|e| {
                tracing::error!(group = %input.group, song = %input.title, error = %e, "Enrichment failed");
            })?;

        let draft = NewSong {
            group: input.group,
            title: input.title,
            release_date: Some(detail.release_date),
            text: Some(detail.text),
            link: Some(detail.link),
        };
        let id = self.store.create(&draft).await?;
        tracing::info!(song_id = id, group = %draft.group, song = %draft.title, "Song created");
        Ok(draft.into_song(id))
    }

    /// Replace every mutable field of song `id`.
    pub async fn update_song(&self, id: DbId, input: UpdateSong) -> CatalogResult<Song> {
        validate_id(id)?;
        require_non_blank("group", &input.group)?;
        require_non_blank("song", &input.title)?;
        if let Some(date) = input.release_date.as_deref() {
            validate_release_date(date)?;
        }

        let song = self
            .store
            .update(id, &input)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(song_id = id, "Song updated");
        Ok(song)
    }

    /// Delete song `id`. Deleting a song that does not exist succeeds.
    pub async fn delete_song(&self, id: DbId) -> CatalogResult<()> {
        validate_id(id)?;
        let removed = self.store.delete(id).await?;
        tracing::info!(song_id = id, removed, "Song deleted");
        Ok(())
    }

    pub async fn get_song_by_id(&self, id: DbId) -> CatalogResult<Song> {
        validate_id(id)?;
        let song = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(song)
    }

    /// The verses of `song` on the requested page, with the page actually
    /// used. Missing or non-positive page values fall back to page 1 of 5
    /// verses.
    pub fn get_song_text(
        &self,
        song: &Song,
        verse_page: Option<i64>,
        verse_page_size: Option<i64>,
    ) -> (VersePage, String) {
        let page = VersePage::new(verse_page, verse_page_size);
        let text = song.text.as_deref().unwrap_or_default();
        tracing::debug!(
            song_id = song.id,
            total_verses = verse_count(text),
            verse_page = page.page(),
            verse_page_size = page.page_size(),
            "Paginating verses"
        );
        (page, paginate_verses(text, page))
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Song store health check failed");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
