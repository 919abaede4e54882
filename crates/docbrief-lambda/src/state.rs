use std::sync::Arc;

use crate::ports::{ObjectStore, TextModel};

/// Shared application state, injected into all route handlers via Axum
/// state. Collaborators are trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub model: Arc<dyn TextModel>,
}
