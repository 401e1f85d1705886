//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! cheap to clone: the backend client shares one connection pool and the
//! config sits behind an `Arc`.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: BackendClient, config: AppConfig) -> Self {
        Self { backend, config: Arc::new(config) }
    }
}
