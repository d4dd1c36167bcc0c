pub mod health;
pub mod songs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /songs                 list, create
/// /songs/{id}            get, replace, delete
/// /songs/{id}/text       paginated lyrics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/songs", songs::router())
}
