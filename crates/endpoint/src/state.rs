//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Holds only configuration. ShipStation clients are built per request from
/// the hub-supplied credentials, so there is nothing else to share.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
