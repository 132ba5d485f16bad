use std::sync::Arc;

use carepath_storage::store::DocumentStore;

use crate::middleware::auth::TokenVerifier;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// `None` when no signing key is configured; protected routes then reject everything.
    pub verifier: Option<Arc<TokenVerifier>>,
}
