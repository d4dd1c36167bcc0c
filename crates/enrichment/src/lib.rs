//! HTTP client for the external song details provider.
//!
//! The provider answers `GET {base_url}?group=..&song=..` with the release
//! date, lyrics and a reference link for a song. Songs are enriched once, at
//! creation time, through [`EnrichmentClient::fetch_song_detail`].

use std::time::Duration;

use serde::Deserialize;
use songbook_core::validation::validate_release_date;

/// Default timeout for a single provider request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Details returned by the provider for one song.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongDetail {
    /// Release date in `YYYY-MM-DD` form.
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    /// Lyrics, one verse per line.
    pub text: String,
    /// Reference link for the song.
    pub link: String,
}

/// Errors from the enrichment provider. Any of them aborts song creation.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not a valid song detail document.
    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// HTTP client for the song details provider.
#[derive(Debug, Clone)]
pub struct EnrichmentClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnrichmentClient {
    /// Create a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up release date, lyrics and link for `(group, title)`.
    pub async fn fetch_song_detail(
        &self,
        group: &str,
        title: &str,
    ) -> Result<SongDetail, EnrichmentError> {
        tracing::debug!(group, title, url = %self.base_url, "Requesting song details");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("group", group), ("song", title)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), group, title, "Provider rejected lookup");
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let detail = parse_song_detail(&body)?;
        tracing::debug!(group, title, release_date = %detail.release_date, "Song details received");
        Ok(detail)
    }
}

/// Decode and sanity-check a provider response body.
fn parse_song_detail(body: &str) -> Result<SongDetail, EnrichmentError> {
    let detail: SongDetail =
        serde_json::from_str(body).map_err(|e| EnrichmentError::Decode(e.to_string()))?;
    validate_release_date(&detail.release_date)
        .map_err(|e| EnrichmentError::Decode(e.to_string()))?;
    Ok(detail)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
