use std::sync::Arc;

use crate::humanize::TextStyleTransformer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Compiled phrase tables and voice patterns; read-only after startup.
    pub transformer: Arc<TextStyleTransformer>,
}
