use songbook_core::error::CoreError;
use songbook_enrichment::EnrichmentError;

/// Error returned by every catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Validation and not-found failures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing store failed (connectivity, constraint, query).
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// The enrichment provider failed; nothing was persisted.
    #[error("Enrichment failed: {0}")]
    Enrichment(#[from] EnrichmentError),
}

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
    Enrichment,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Core(CoreError::Validation(_)) => ErrorKind::Validation,
            CatalogError::Core(CoreError::NotFound { .. }) => ErrorKind::NotFound,
            CatalogError::Storage(_) => ErrorKind::Storage,
            CatalogError::Enrichment(_) => ErrorKind::Enrichment,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_its_own_kind() {
        let cases = [
            (
                CatalogError::from(CoreError::Validation("bad".into())),
                ErrorKind::Validation,
            ),
            (
                CatalogError::from(CoreError::NotFound { entity: "Song", id: 3 }),
                ErrorKind::NotFound,
            ),
            (CatalogError::from(sqlx::Error::PoolTimedOut), ErrorKind::Storage),
            (
                CatalogError::from(EnrichmentError::Decode("eof".into())),
                ErrorKind::Enrichment,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.kind(), expected, "{err}");
        }
    }
}
