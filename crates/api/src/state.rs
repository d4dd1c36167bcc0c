use std::sync::Arc;

use songbook_catalog::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Song catalog use cases.
    pub catalog: Arc<CatalogService>,
}
