//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise appending, searching, deletion, clearing and sharing
//! through the `HistoryManagerTrait` interface, using in-memory stores.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pocketcalc::database::{KeyValueStore, MemoryStore, SqliteStore, HISTORY_KEY};
use pocketcalc::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_LIMIT};
use pocketcalc::services::collaborators::ShareTarget;
use pocketcalc::types::errors::{HistoryError, ShareError, StorageError};
use pocketcalc::types::history::{HistoryItem, HistoryKind};

/// Helper: a manager over a fresh in-memory store, plus the store itself.
fn setup() -> (Arc<MemoryStore>, HistoryManager) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), HistoryManager::new(store))
}

/// Store whose every operation fails.
struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("broken".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("broken".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("broken".to_string()))
    }
}

/// Share target recording messages, optionally failing.
#[derive(Default)]
struct RecordingShare {
    fail: bool,
    messages: Mutex<Vec<String>>,
}

#[async_trait]
impl ShareTarget for RecordingShare {
    async fn share(&self, message: &str) -> Result<(), ShareError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            Err(ShareError::Failed("no share sheet".to_string()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_append_is_newest_first() {
    let (_, mut mgr) = setup();
    mgr.append(HistoryItem::calculation("2+3*4", "14")).await;
    mgr.append(HistoryItem::conversion("10m = 32.81ft".to_string(), "Length"))
        .await;

    let items = mgr.list();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, HistoryKind::Conversion);
    assert_eq!(items[0].category.as_deref(), Some("Length"));
    assert_eq!(items[1].expression.as_deref(), Some("2+3*4"));
    assert_eq!(items[1].category.as_deref(), Some("Basic"));
}

#[tokio::test]
async fn test_append_past_limit_evicts_oldest() {
    let (store, mut mgr) = setup();
    for i in 0..=HISTORY_LIMIT {
        mgr.append(HistoryItem::calculation(&format!("{}+0", i), &i.to_string()))
            .await;
    }

    assert_eq!(mgr.list().len(), HISTORY_LIMIT);
    assert_eq!(mgr.list()[0].result, HISTORY_LIMIT.to_string());
    assert!(mgr.list().iter().all(|item| item.result != "0"));

    let saved = store.get(HISTORY_KEY).await.unwrap().unwrap();
    assert_eq!(HistoryManager::from_json(&saved).unwrap().len(), HISTORY_LIMIT);
}

#[tokio::test]
async fn test_load_restores_persisted_log() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut mgr = HistoryManager::new(store.clone());
        mgr.append(HistoryItem::tip("Bill: $10.00".to_string())).await;
        mgr.append(HistoryItem::calculation("1+1", "2")).await;
    }

    let mut mgr = HistoryManager::new(store);
    mgr.load().await;
    assert_eq!(mgr.list().len(), 2);
    assert_eq!(mgr.list()[0].result, "2");
    assert_eq!(mgr.list()[1].kind, HistoryKind::Tip);
}

#[tokio::test]
async fn test_load_truncates_oversized_log_keeping_newest() {
    let store = Arc::new(MemoryStore::new());
    let stored: Vec<HistoryItem> = (0..150)
        .map(|i| HistoryItem::calculation(&format!("{}+0", i), &i.to_string()))
        .collect();
    store
        .set(HISTORY_KEY, &HistoryManager::to_json(&stored).unwrap())
        .await
        .unwrap();

    let mut mgr = HistoryManager::new(store);
    mgr.load().await;

    assert_eq!(mgr.list().len(), HISTORY_LIMIT);
    assert_eq!(mgr.list(), &stored[..HISTORY_LIMIT]);
}

#[tokio::test]
async fn test_load_from_sqlite_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let mut mgr = HistoryManager::new(store.clone());
    mgr.append(HistoryItem::calculation("6/3", "2")).await;

    let mut reloaded = HistoryManager::new(store);
    reloaded.load().await;
    assert_eq!(reloaded.list(), mgr.list());
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_result_and_expression() {
    let (_, mut mgr) = setup();
    mgr.append(HistoryItem::conversion("10KG = 22.05lb".to_string(), "Weight"))
        .await;
    mgr.append(HistoryItem::calculation("12*12", "144")).await;
    mgr.append(HistoryItem::calculation("7-3", "4")).await;

    let hits = mgr.search("kg");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category.as_deref(), Some("Weight"));

    let hits = mgr.search("12*");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].result, "144");

    assert_eq!(mgr.search("").len(), 3);
    assert!(mgr.search("zzz").is_empty());
}

#[tokio::test]
async fn test_delete_entry_removes_only_that_entry() {
    let (store, mut mgr) = setup();
    mgr.append(HistoryItem::calculation("1+1", "2")).await;
    mgr.append(HistoryItem::calculation("2+2", "4")).await;
    let id = mgr.list()[1].id.clone();

    mgr.delete_entry(&id).await.unwrap();
    assert_eq!(mgr.list().len(), 1);
    assert!(mgr.get(&id).is_none());

    let saved = store.get(HISTORY_KEY).await.unwrap().unwrap();
    assert_eq!(HistoryManager::from_json(&saved).unwrap().len(), 1);

    let err = mgr.delete_entry(&id).await.unwrap_err();
    assert!(matches!(err, HistoryError::NotFound(_)));
}

#[tokio::test]
async fn test_clear_all_removes_key() {
    let (store, mut mgr) = setup();
    mgr.append(HistoryItem::calculation("1+1", "2")).await;
    assert!(store.get(HISTORY_KEY).await.unwrap().is_some());

    mgr.clear_all().await;
    assert!(mgr.list().is_empty());
    assert_eq!(store.get(HISTORY_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_storage_failures_keep_memory_state() {
    let mut mgr = HistoryManager::new(Arc::new(BrokenStore));
    mgr.load().await;
    assert!(mgr.is_loaded());
    assert!(mgr.list().is_empty());

    mgr.append(HistoryItem::calculation("3*3", "9")).await;
    assert_eq!(mgr.list().len(), 1);

    mgr.clear_all().await;
    assert!(mgr.list().is_empty());
}

#[tokio::test]
async fn test_share_sends_display_text() {
    let (_, mut mgr) = setup();
    mgr.append(HistoryItem::calculation("2+3", "5")).await;
    mgr.append(HistoryItem::tip("Bill: $10.00".to_string())).await;

    let target = RecordingShare::default();
    for item in mgr.list() {
        mgr.share(item, &target).await;
    }
    assert_eq!(
        *target.messages.lock().unwrap(),
        vec!["Bill: $10.00".to_string(), "2+3 = 5".to_string()]
    );
}

#[tokio::test]
async fn test_share_failure_is_swallowed() {
    let (_, mut mgr) = setup();
    mgr.append(HistoryItem::calculation("2+3", "5")).await;

    let target = RecordingShare {
        fail: true,
        ..Default::default()
    };
    mgr.share(&mgr.list()[0], &target).await;
    assert_eq!(target.messages.lock().unwrap().len(), 1);
    assert_eq!(mgr.list().len(), 1);
}
