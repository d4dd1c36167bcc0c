//! Handlers for the song catalog.
//!
//! Thin adapters: parse the request, call [`CatalogService`], wrap the result
//! in a [`DataResponse`].
//!
//! [`CatalogService`]: songbook_catalog::CatalogService

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use songbook_core::types::DbId;
use songbook_db::models::song::{CreateSong, Song, UpdateSong};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query keys consumed by pagination; everything else is a filter.
const LIMIT_PARAM: &str = "limit";
const OFFSET_PARAM: &str = "offset";

/// Query parameters for `GET /songs/{id}/text`.
///
/// Kept as raw strings so empty values fall back to the defaults and
/// malformed ones produce the usual JSON error body.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VersePageParams {
    /// 1-indexed verse page (default 1).
    #[serde(rename = "versePage")]
    #[param(value_type = Option<i64>)]
    pub verse_page: Option<String>,
    /// Verses per page (default 5).
    #[serde(rename = "versePageSize")]
    #[param(value_type = Option<i64>)]
    pub verse_page_size: Option<String>,
}

/// One page of a song's lyrics.
#[derive(Debug, Serialize, ToSchema)]
pub struct SongText {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[serde(rename = "versePage")]
    pub verse_page: usize,
    #[serde(rename = "versePageSize")]
    pub verse_page_size: usize,
    pub text: String,
}

/// Parse an optional integer query value. Empty means absent.
fn parse_page_param(key: &str, raw: Option<&str>) -> AppResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            AppError::BadRequest(format!("{key} must be an integer, got '{value}'"))
        }),
    }
}

/// GET /api/v1/songs
///
/// `limit` and `offset` page the result; every other query parameter is a
/// filter key and is validated by the catalog.
#[utoipa::path(
    get,
    path = "/api/v1/songs",
    tag = "songs",
    params(
        ("group" = Option<String>, Query, description = "Exact group name"),
        ("song" = Option<String>, Query, description = "Exact song title"),
        ("limit" = Option<i64>, Query, description = "Page size, 1..=100 (default 11)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)"),
    ),
    responses(
        (status = 200, description = "Matching songs ordered by id, in a `data` envelope", body = [Song]),
        (status = 400, description = "Unknown filter key or bad pagination"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn list_songs(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let mut limit = None;
    let mut offset = None;
    let mut filters = Vec::with_capacity(params.len());

    for (key, value) in params {
        match key.as_str() {
            LIMIT_PARAM => limit = parse_page_param(LIMIT_PARAM, Some(&value))?,
            OFFSET_PARAM => offset = parse_page_param(OFFSET_PARAM, Some(&value))?,
            _ => filters.push((key, value)),
        }
    }

    let songs = state.catalog.list_songs(filters, limit, offset).await?;

    Ok(Json(DataResponse { data: songs }))
}

/// POST /api/v1/songs
///
/// Enriches the song from the details provider, stores it and returns the
/// full record.
#[utoipa::path(
    post,
    path = "/api/v1/songs",
    tag = "songs",
    request_body = CreateSong,
    responses(
        (status = 201, description = "Song created, in a `data` envelope", body = Song),
        (status = 400, description = "Blank group or song"),
        (status = 502, description = "Details provider failed; nothing stored"),
    )
)]
pub async fn create_song(
    State(state): State<AppState>,
    Json(input): Json<CreateSong>,
) -> AppResult<impl IntoResponse> {
    let song = state.catalog.create_song(input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: song })))
}

/// GET /api/v1/songs/{id}
#[utoipa::path(
    get,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 200, description = "The song, in a `data` envelope", body = Song),
        (status = 404, description = "No song with this id"),
    )
)]
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let song = state.catalog.get_song_by_id(id).await?;

    Ok(Json(DataResponse { data: song }))
}

/// PUT /api/v1/songs/{id}
///
/// Full replace; omitted optional fields are cleared.
#[utoipa::path(
    put,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    request_body = UpdateSong,
    responses(
        (status = 200, description = "The replaced song, in a `data` envelope", body = Song),
        (status = 400, description = "Blank field or malformed release date"),
        (status = 404, description = "No song with this id"),
    )
)]
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSong>,
) -> AppResult<impl IntoResponse> {
    let song = state.catalog.update_song(id, input).await?;

    Ok(Json(DataResponse { data: song }))
}

/// DELETE /api/v1/songs/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 204, description = "Deleted, or already absent"),
    )
)]
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.catalog.delete_song(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/songs/{id}/text
///
/// Returns one page of verses. Absent, empty or non-positive `versePage`
/// and `versePageSize` fall back to 1 and 5.
#[utoipa::path(
    get,
    path = "/api/v1/songs/{id}/text",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id"), VersePageParams),
    responses(
        (status = 200, description = "One page of lyrics, in a `data` envelope", body = SongText),
        (status = 400, description = "Non-numeric page parameter"),
        (status = 404, description = "No song with this id"),
    )
)]
pub async fn get_song_text(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<VersePageParams>,
) -> AppResult<impl IntoResponse> {
    let verse_page = parse_page_param("versePage", params.verse_page.as_deref())?;
    let verse_page_size = parse_page_param("versePageSize", params.verse_page_size.as_deref())?;

    let song = state.catalog.get_song_by_id(id).await?;
    let (page, text) = state
        .catalog
        .get_song_text(&song, verse_page, verse_page_size);

    Ok(Json(DataResponse {
        data: SongText {
            id: song.id,
            verse_page: page.page(),
            verse_page_size: page.page_size(),
            text,
        },
    }))
}
