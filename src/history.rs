use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::category::PromptCategory;
use crate::config::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};
use crate::store::KeyValueStore;

// Define a generated prompt entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub category: PromptCategory,
}

/// Bounded, newest-first log of generated prompts, mirrored to a key-value
/// store after every change. Storage failures are logged and never undo the
/// in-memory update.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    key: String,
    capacity: usize,
    entries: Vec<GeneratedPrompt>,
    last_id: i64,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S, capacity: usize, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            capacity: capacity.max(1),
            entries: Vec::new(),
            last_id: 0,
        }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY)
    }

    /// Restore the log from the persisted copy. Missing or unreadable data
    /// leaves the log empty.
    pub fn load(&mut self) {
        self.entries = match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<GeneratedPrompt>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(self.capacity);
                    entries
                }
                Err(e) => {
                    warn!("Discarding corrupt prompt history under '{}': {}", self.key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read prompt history '{}': {}", self.key, e);
                Vec::new()
            }
        };
        self.last_id = self.entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        info!("Loaded {} prompts from history", self.entries.len());
    }

    pub fn record(&mut self, text: impl Into<String>, category: PromptCategory) -> GeneratedPrompt {
        let created_at = Utc::now();
        let id = self.next_id(created_at.timestamp_millis());

        let entry = GeneratedPrompt {
            id,
            text: text.into(),
            created_at,
            category,
        };

        self.entries.insert(0, entry.clone());
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!("Evicted {} old prompts from history", evicted);
        }

        self.persist();
        entry
    }

    pub fn list(&self) -> &[GeneratedPrompt] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(&self.key) {
            warn!("Failed to remove prompt history '{}': {}", self.key, e);
        }
        info!("Prompt history cleared");
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Ids derive from the creation time but never repeat or go backwards
    fn next_id(&mut self, candidate: i64) -> i64 {
        let id = if candidate > self.last_id { candidate } else { self.last_id + 1 };
        self.last_id = id;
        id
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Failed to serialize prompt history: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &serialized) {
            warn!("Failed to persist prompt history '{}': {}", self.key, e);
        }
    }
}
