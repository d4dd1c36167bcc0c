//! In-memory doubles for [`SongStore`] and [`SongEnricher`].
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to downstream integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use songbook_core::filter::SongFilter;
use songbook_core::pagination::PageRequest;
use songbook_core::types::DbId;
use songbook_db::models::song::{NewSong, Song, UpdateSong};
use songbook_enrichment::{EnrichmentError, SongDetail};

use crate::ports::{SongEnricher, SongStore};

#[derive(Default)]
struct Rows {
    last_id: DbId,
    songs: BTreeMap<DbId, Song>,
}

/// A [`SongStore`] kept in a map, with Postgres-like id assignment.
#[derive(Default)]
pub struct MemorySongStore {
    rows: Mutex<Rows>,
    offline: AtomicBool,
    list_calls: AtomicUsize,
}

impl MemorySongStore {
    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().songs.len()
    }

    /// Number of times [`SongStore::list`] was invoked.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), sqlx::Error> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn create(&self, song: &NewSong) -> Result<DbId, sqlx::Error> {
        self.check_online()?;
        let mut rows = self.rows.lock().unwrap();
        rows.last_id += 1;
        let id = rows.last_id;
        rows.songs.insert(id, song.clone().into_song(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        self.check_online()?;
        Ok(self.rows.lock().unwrap().songs.get(&id).cloned())
    }

    async fn update(&self, id: DbId, song: &UpdateSong) -> Result<Option<Song>, sqlx::Error> {
        self.check_online()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.songs.get_mut(&id).map(|row| {
            *row = song.clone().into_song(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check_online()?;
        Ok(self.rows.lock().unwrap().songs.remove(&id).is_some())
    }

    async fn list(&self, filter: &SongFilter, page: PageRequest) -> Result<Vec<Song>, sqlx::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .songs
            .values()
            .filter(|s| filter.matches(&s.group, &s.title))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_online()
    }
}

/// A [`SongEnricher`] that answers every lookup the same way.
#[derive(Clone)]
pub struct FakeEnricher {
    outcome: Result<SongDetail, u16>,
    calls: Arc<AtomicUsize>,
}

impl FakeEnricher {
    pub fn returning(release_date: &str, text: &str, link: &str) -> Self {
        Self {
            outcome: Ok(SongDetail {
                release_date: release_date.to_string(),
                text: text.to_string(),
                link: link.to_string(),
            }),
            calls: Arc::default(),
        }
    }

    /// Fail every lookup with the given HTTP status.
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            outcome: Err(status),
            calls: Arc::default(),
        }
    }

    /// Shared counter of lookups performed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for FakeEnricher {
    fn default() -> Self {
        Self::returning("2000-01-01", "first verse\nsecond verse", "https://example.com/song")
    }
}

#[async_trait]
impl SongEnricher for FakeEnricher {
    async fn song_detail(&self, _group: &str, _title: &str) -> Result<SongDetail, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(detail) => Ok(detail.clone()),
            Err(status) => Err(EnrichmentError::Status {
                status: *status,
                body: "provider unavailable".to_string(),
            }),
        }
    }
}
