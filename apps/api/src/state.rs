use std::sync::Arc;

use crate::config::Config;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Singleton profile storage. `PgProfileStore` in the server.
    pub store: Arc<dyn ProfileStore>,
    pub config: Config,
}
