use std::sync::Arc;

use crate::enhance::Enhancer;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub enhancer: Arc<Enhancer>,
    /// Opened once at startup; tests build a fresh one per case.
    pub store: Arc<ResumeStore>,
}
