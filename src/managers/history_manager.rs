//! History Manager for pocketcalc.
//!
//! Implements `HistoryManagerTrait` for the calculation history. The log
//! lives in memory, most recent first, and is written in full to the
//! key-value store after every change.

use std::sync::Arc;

use async_trait::async_trait;

use crate::database::{KeyValueStore, HISTORY_KEY};
use crate::services::collaborators::ShareTarget;
use crate::types::errors::HistoryError;
use crate::types::history::HistoryItem;

/// Maximum number of entries retained.
pub const HISTORY_LIMIT: usize = 100;

/// Trait defining history management operations.
#[async_trait]
pub trait HistoryManagerTrait {
    async fn load(&mut self);
    async fn append(&mut self, item: HistoryItem);
    fn search(&self, query: &str) -> Vec<&HistoryItem>;
    fn list(&self) -> &[HistoryItem];
    fn get(&self, id: &str) -> Option<&HistoryItem>;
    async fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError>;
    async fn clear_all(&mut self);
    async fn share(&self, item: &HistoryItem, target: &dyn ShareTarget);
    fn is_loaded(&self) -> bool;
}

/// History manager backed by a key-value store.
pub struct HistoryManager {
    store: Arc<dyn KeyValueStore>,
    items: Vec<HistoryItem>,
    loaded: bool,
}

impl HistoryManager {
    /// Creates an empty, not-yet-loaded manager.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Serializes the log in its persisted JSON shape.
    pub fn to_json(items: &[HistoryItem]) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(items)?)
    }

    /// Parses a persisted log.
    pub fn from_json(json: &str) -> Result<Vec<HistoryItem>, HistoryError> {
        Ok(serde_json::from_str(json)?)
    }

    async fn read_persisted(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        match self.store.get(HISTORY_KEY).await? {
            Some(json) => Self::from_json(&json),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the stored log with the current one.
    async fn persist(&self) -> Result<(), HistoryError> {
        let json = Self::to_json(&self.items)?;
        self.store.set(HISTORY_KEY, &json).await?;
        Ok(())
    }

    async fn persist_or_log(&self) {
        if let Err(e) = self.persist().await {
            tracing::error!(error = %e, "Error saving history");
        }
    }
}

#[async_trait]
impl HistoryManagerTrait for HistoryManager {
    /// Loads the persisted log. Any failure leaves the history empty.
    async fn load(&mut self) {
        self.items = match self.read_persisted().await {
            Ok(mut items) => {
                items.truncate(HISTORY_LIMIT);
                items
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading history");
                Vec::new()
            }
        };
        self.loaded = true;
        tracing::debug!(entries = self.items.len(), "history loaded");
    }

    /// Prepends `item`, drops anything past [`HISTORY_LIMIT`] and persists.
    async fn append(&mut self, item: HistoryItem) {
        tracing::debug!(id = %item.id, kind = ?item.kind, "history append");

        let mut next = Vec::with_capacity(HISTORY_LIMIT);
        next.push(item);
        next.extend(self.items.iter().take(HISTORY_LIMIT - 1).cloned());
        self.items = next;

        self.persist_or_log().await;
    }

    /// Case-insensitive substring search over result and expression.
    fn search(&self, query: &str) -> Vec<&HistoryItem> {
        let needle = query.to_lowercase();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    fn list(&self) -> &[HistoryItem] {
        &self.items
    }

    fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Removes a single entry and persists the remaining log.
    async fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        self.items.remove(position);

        self.persist_or_log().await;
        Ok(())
    }

    /// Empties the log and removes the persisted key.
    ///
    /// Callers are responsible for obtaining user confirmation first.
    async fn clear_all(&mut self) {
        self.items = Vec::new();
        if let Err(e) = self.store.remove(HISTORY_KEY).await {
            tracing::error!(error = %e, "Error clearing history");
        }
    }

    /// Sends the entry's text to `target`; failures are logged only.
    async fn share(&self, item: &HistoryItem, target: &dyn ShareTarget) {
        if let Err(e) = target.share(&item.display_text()).await {
            tracing::error!(error = %e, id = %item.id, "Error sharing");
        }
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }
}
