use std::sync::Arc;

use crate::puzzle::generator::PuzzleConfig;
use crate::puzzle::word_source::WordSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing mutable: each request builds its own grid and RNG.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable word source. Default: LlmWordSource.
    pub word_source: Arc<dyn WordSource>,
    pub puzzle: Arc<PuzzleConfig>,
}
