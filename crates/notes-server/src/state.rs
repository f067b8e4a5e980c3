//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note operations over the configured repository.
    notes: Arc<NoteService>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(notes: NoteService, config: ServerConfig) -> Self {
        Self {
            notes: Arc::new(notes),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note service.
    pub fn notes(&self) -> &NoteService {
        &self.notes
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
