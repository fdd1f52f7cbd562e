//! Application state shared across handlers.

use std::sync::Arc;

use quill_store::Store;

use crate::config::ServerConfig;
use crate::presence::PresenceClient;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Database store.
    store: Arc<Store>,
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// External presence service client.
    presence: Arc<PresenceClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, config: ServerConfig) -> Self {
        let presence = PresenceClient::from_config(&config);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            presence: Arc::new(presence),
        }
    }

    /// Get a reference to the database store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the presence client.
    pub fn presence(&self) -> &PresenceClient {
        &self.presence
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
