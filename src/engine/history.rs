// HotelChat — Engine: History Store

use crate::atoms::types::ChatMessage;
use crate::engine::storage::StorageBackend;

/// Persisted transcript for one visitor.
///
/// Keeps browser-storage semantics: a failed or unreadable load yields
/// an empty conversation, a failed save loses at most the newest turn,
/// and the widget keeps running either way. Failures go to the log.
pub struct HistoryStore<S> {
    backend: S,
    key: String,
}

impl<S: StorageBackend> HistoryStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Full transcript, oldest first. Empty when nothing was saved yet
    /// or the saved blob does not parse.
    pub fn load(&self) -> Vec<ChatMessage> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("[history] cannot read chat history from storage: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                log::error!("[history] cannot read chat history from storage: {e}");
                Vec::new()
            }
        }
    }

    /// Persist the full transcript, replacing the previous blob. The
    /// in-memory conversation stays authoritative on failure.
    pub fn save(&self, history: &[ChatMessage]) {
        let raw = match serde_json::to_string(history) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("[history] cannot save chat history to storage: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.key, &raw) {
            log::error!("[history] cannot save chat history to storage: {e}");
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
