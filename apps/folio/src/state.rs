use std::sync::Arc;

use crate::config::Config;
use crate::content::Content;
use crate::llm_client::Completions;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend, absent when no API key is configured. The ask
    /// handler reports the missing credential instead of calling out.
    pub backend: Option<Arc<dyn Completions>>,
    pub content: Arc<Content>,
    pub config: Config,
}
