//! Song catalog use cases.
//!
//! [`CatalogService`] orchestrates the song store, the enrichment provider
//! and the verse paginator behind the API consumed by the HTTP layer. Both
//! collaborators sit behind traits ([`SongStore`], [`SongEnricher`]) so the
//! service can run against Postgres and the real provider in production and
//! against in-memory doubles in tests.

pub mod error;
pub mod ports;
pub mod service;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{CatalogError, ErrorKind};
pub use ports::{PgSongStore, SongEnricher, SongStore};
pub use service::CatalogService;
