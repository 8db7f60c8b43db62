use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::UserStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// User record store, behind a trait object so tests can swap in an
    /// in-memory implementation.
    pub store: Arc<dyn UserStore>,
    pub llm: LlmClient,
}
