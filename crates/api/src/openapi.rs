//! OpenAPI document for the HTTP API, served with Swagger UI.

use songbook_db::models::song::{CreateSong, Song, UpdateSong};
use utoipa::OpenApi;

use crate::handlers::songs::{self, SongText};

/// Path of the generated OpenAPI JSON.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Mount point of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(title = "Songbook API", description = "Song catalog with lyrics enrichment"),
    paths(
        songs::list_songs,
        songs::create_song,
        songs::get_song,
        songs::update_song,
        songs::delete_song,
        songs::get_song_text,
    ),
    components(schemas(Song, CreateSong, UpdateSong, SongText)),
    tags((name = "songs", description = "Song catalog"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_song_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert_eq!(
            paths,
            vec![
                "/api/v1/songs",
                "/api/v1/songs/{id}",
                "/api/v1/songs/{id}/text",
            ]
        );
    }

    #[test]
    fn song_schema_uses_wire_field_names() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &json["components"]["schemas"]["Song"]["properties"];

        assert!(props["song"].is_object());
        assert!(props["releaseDate"].is_object());
        assert!(props["title"].is_null());
    }
}
