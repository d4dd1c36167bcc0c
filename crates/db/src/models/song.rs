//! Song entity model and DTOs.
//!
//! JSON names follow the public wire format (`group`, `song`,
//! `releaseDate`), column names follow the `songs` table.

use serde::{Deserialize, Serialize};
use songbook_core::types::DbId;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `songs` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Song {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[sqlx(rename = "group_name")]
    pub group: String,
    #[sqlx(rename = "song_title")]
    #[serde(rename = "song")]
    pub title: String,
    #[serde(rename = "releaseDate")]
    #[schema(example = "2006-07-16")]
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

/// DTO for creating a song. Release date, lyrics and link are filled in by
/// enrichment, never by the caller.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSong {
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
}

/// A fully populated song that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub title: String,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl NewSong {
    /// Attach the identifier assigned by the store.
    pub fn into_song(self, id: DbId) -> Song {
        Song {
            id,
            group: self.group,
            title: self.title,
            release_date: self.release_date,
            text: self.text,
            link: self.link,
        }
    }
}

/// DTO for replacing every mutable field of a song.
///
/// Omitted optional fields are stored as NULL: an update replaces the song,
/// it does not merge into it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSong {
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
    #[serde(rename = "releaseDate")]
    #[schema(example = "2006-07-16")]
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl UpdateSong {
    /// The song as it will read after the update is applied to `id`.
    pub fn into_song(self, id: DbId) -> Song {
        Song {
            id,
            group: self.group,
            title: self.title,
            release_date: self.release_date,
            text: self.text,
            link: self.link,
        }
    }
}
