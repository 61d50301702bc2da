use std::sync::Arc;

use crate::taxonomy::Catalog;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalog is loaded once at startup and read-only
/// thereafter, so concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}
