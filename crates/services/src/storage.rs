use async_trait::async_trait;
use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const CONTAINER_SESSIONS: &str = "meeting_sessions";
pub const CONTAINER_MINUTES: &str = "minutes";
pub const CONTAINER_HISTORY: &str = "conversation_history";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value document store for derived meeting artifacts.
///
/// Documents are JSON values in named containers, keyed by id. This is the
/// seam where a hosted document database would plug in; the shipped
/// implementation keeps everything in process memory.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upsert(&self, container: &str, id: &str, doc: Value) -> StoreResult<()>;
    async fn get(&self, container: &str, id: &str) -> StoreResult<Option<Value>>;
    async fn delete(&self, container: &str, id: &str) -> StoreResult<()>;
}

/// Serializes `value` and upserts it under `(container, id)`.
pub async fn upsert_as<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    container: &str,
    id: &str,
    value: &T,
) -> StoreResult<()> {
    store
        .upsert(container, id, serde_json::to_value(value)?)
        .await
}

/// Fetches `(container, id)` and deserializes it into `T`.
pub async fn get_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    container: &str,
    id: &str,
) -> StoreResult<Option<T>> {
    match store.get(container, id).await? {
        Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
        None => Ok(None),
    }
}

/// In-memory `DocumentStore` over per-container maps.
#[derive(Default)]
pub struct MemoryStore {
    containers: DashMap<String, DashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn upsert(&self, container: &str, id: &str, doc: Value) -> StoreResult<()> {
        self.containers
            .entry(container.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        debug!(container, id, "document upserted");
        Ok(())
    }

    async fn get(&self, container: &str, id: &str) -> StoreResult<Option<Value>> {
        Ok(self
            .containers
            .get(container)
            .and_then(|c| c.get(id).map(|doc| doc.value().clone())))
    }

    async fn delete(&self, container: &str, id: &str) -> StoreResult<()> {
        if let Some(c) = self.containers.get(container) {
            c.remove(id);
        }
        Ok(())
    }
}
