//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use songbook_api::error::AppError;
use songbook_catalog::CatalogError;
use songbook_core::error::CoreError;
use songbook_enrichment::EnrichmentError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Song",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Song with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("unknown filter key 'genre'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "unknown filter key 'genre'");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("limit must be an integer, got 'x'".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "limit must be an integer, got 'x'");
}

// ---------------------------------------------------------------------------
// Test: storage errors map to 500 and hide details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: provider errors map to 502 and hide the provider body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn enrichment_error_returns_502() {
    let err = AppError::Enrichment(EnrichmentError::Status {
        status: 503,
        body: "internal provider stack trace".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "ENRICHMENT_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("stack trace"));
}

// ---------------------------------------------------------------------------
// Test: every catalog error kind reaches a distinct status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_errors_convert_by_kind() {
    let cases = [
        (
            CatalogError::from(CoreError::Validation("bad".into())),
            StatusCode::BAD_REQUEST,
        ),
        (
            CatalogError::from(CoreError::NotFound { entity: "Song", id: 1 }),
            StatusCode::NOT_FOUND,
        ),
        (
            CatalogError::from(sqlx::Error::PoolClosed),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            CatalogError::from(EnrichmentError::Decode("eof".into())),
            StatusCode::BAD_GATEWAY,
        ),
    ];

    for (err, expected) in cases {
        let (status, _) = error_to_response(AppError::from(err)).await;
        assert_eq!(status, expected);
    }
}
