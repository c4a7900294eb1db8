//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::services::auth::SessionKeys;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration, the connection
/// pool (internally pooled and safe for concurrent handlers) and the
/// session signing keys derived once at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    session_keys: SessionKeys,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let session_keys = SessionKeys::new(&config.jwt_secret);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                session_keys,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the session signing keys.
    #[must_use]
    pub fn session_keys(&self) -> &SessionKeys {
        &self.inner.session_keys
    }
}
