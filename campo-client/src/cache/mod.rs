//! The request cache for query operations.
//!
//! Results are keyed by `(operation name, variables)` and never treated as
//! stale: an entry leaves the cache only through invalidation or LRU
//! eviction. Identical in-flight reads are deduplicated through a wait map
//! so one upstream request serves every concurrent caller.

mod storage;

use std::collections::HashMap;
use std::sync::Arc;

use campo_client_core::{FetchError, OperationName};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{broadcast, oneshot, Mutex};

use self::storage::CacheStorage;

/// Cache key: the operation name plus its canonical variables JSON.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct CacheKey {
    name: OperationName,
    variables: String,
}

impl CacheKey {
    pub(crate) fn new(
        name: OperationName,
        variables: &impl Serialize,
    ) -> Result<Self, FetchError> {
        let variables =
            serde_json::to_string(variables).map_err(|error| FetchError::InvalidVariables {
                reason: error.to_string(),
            })?;
        Ok(Self { name, variables })
    }
}

type WaitMap = Arc<Mutex<HashMap<CacheKey, broadcast::Sender<Result<Value, FetchError>>>>>;

/// Deduplicating, never-stale cache over raw result payloads.
#[derive(Clone)]
pub(crate) struct QueryCache {
    wait_map: WaitMap,
    storage: CacheStorage<CacheKey, Value>,
}

/// What a caller holds after asking the cache for a key.
pub(crate) enum Entry {
    /// The value was already cached.
    Hit(Value),
    /// An identical read is in flight; wait for its broadcast.
    Wait(broadcast::Receiver<Result<Value, FetchError>>),
    /// This caller resolves the miss and publishes the outcome.
    Miss(MissGuard),
}

/// Held by the caller elected to resolve a miss. Publishing stores the
/// value and wakes the waiters; errors are broadcast but never stored.
pub(crate) struct MissGuard {
    key: CacheKey,
    sender: broadcast::Sender<Result<Value, FetchError>>,
    cache: QueryCache,
    _drop_signal: oneshot::Sender<()>,
}

impl QueryCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            wait_map: Arc::new(Mutex::new(HashMap::new())),
            storage: CacheStorage::new(capacity),
        }
    }

    pub(crate) async fn entry(&self, key: CacheKey) -> Entry {
        let mut wait_map = self.wait_map.lock().await;
        if let Some(waiter) = wait_map.get(&key) {
            return Entry::Wait(waiter.subscribe());
        }

        let (sender, _receiver) = broadcast::channel(1);
        wait_map.insert(key.clone(), sender.clone());
        drop(wait_map);

        if let Some(value) = self.storage.get(&key).await {
            self.remove_wait(&key).await;
            let _ = sender.send(Ok(value.clone()));
            return Entry::Hit(value);
        }

        // If the elected caller goes away without publishing, the sentinel
        // clears the wait map entry so later reads are not stranded.
        let (drop_signal, drop_sentinel) = oneshot::channel::<()>();
        let cache = self.clone();
        let abandoned_key = key.clone();
        tokio::task::spawn(async move {
            let _ = drop_sentinel.await;
            cache.remove_wait(&abandoned_key).await;
        });

        Entry::Miss(MissGuard {
            key,
            sender,
            cache: self.clone(),
            _drop_signal: drop_signal,
        })
    }

    /// Drop every cached entry for the operation, whatever its variables.
    pub(crate) async fn invalidate(&self, name: OperationName) -> usize {
        let removed = self.storage.remove_where(|key| key.name == name).await;
        tracing::debug!(operation = %name, removed, "invalidated cached query results");
        removed
    }

    async fn remove_wait(&self, key: &CacheKey) {
        self.wait_map.lock().await.remove(key);
    }
}

impl MissGuard {
    pub(crate) async fn publish(self, value: Value) {
        self.cache.storage.insert(self.key.clone(), value.clone()).await;
        self.cache.remove_wait(&self.key).await;
        let _ = self.sender.send(Ok(value));
    }

    pub(crate) async fn publish_error(self, error: FetchError) {
        self.cache.remove_wait(&self.key).await;
        let _ = self.sender.send(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(name: OperationName, variables: Value) -> CacheKey {
        CacheKey::new(name, &variables).unwrap()
    }

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = QueryCache::new(8);
        let k = key(OperationName::ListSectors, json!({ "propriedade_id": "p1" }));

        match cache.entry(k.clone()).await {
            Entry::Miss(guard) => guard.publish(json!({ "setores": [] })).await,
            _ => panic!("first read must be a miss"),
        }

        match cache.entry(k).await {
            Entry::Hit(value) => assert_eq!(value, json!({ "setores": [] })),
            _ => panic!("second read must hit"),
        }
    }

    #[tokio::test]
    async fn distinct_variables_are_distinct_entries() {
        let cache = QueryCache::new(8);
        let k1 = key(OperationName::ListSectors, json!({ "propriedade_id": "p1" }));
        let k2 = key(OperationName::ListSectors, json!({ "propriedade_id": "p2" }));

        match cache.entry(k1).await {
            Entry::Miss(guard) => guard.publish(json!({ "setores": ["a"] })).await,
            _ => panic!("expected a miss"),
        }
        assert!(matches!(cache.entry(k2).await, Entry::Miss(_)));
    }

    #[tokio::test]
    async fn invalidation_covers_every_variable_set() {
        let cache = QueryCache::new(8);
        let sectors_p1 = key(OperationName::ListSectors, json!({ "propriedade_id": "p1" }));
        let sectors_p2 = key(OperationName::ListSectors, json!({ "propriedade_id": "p2" }));
        let lots = key(OperationName::ListLots, json!({ "propriedade_id": "p1" }));

        for k in [sectors_p1.clone(), sectors_p2.clone(), lots.clone()] {
            match cache.entry(k).await {
                Entry::Miss(guard) => guard.publish(json!({})).await,
                _ => panic!("expected a miss"),
            }
        }

        let removed = cache.invalidate(OperationName::ListSectors).await;
        assert_eq!(removed, 2);
        assert!(matches!(cache.entry(sectors_p1).await, Entry::Miss(_)));
        // Unrelated operations keep their entries.
        assert!(matches!(cache.entry(lots).await, Entry::Hit(_)));
    }

    #[tokio::test]
    async fn concurrent_readers_share_one_resolution() {
        let cache = QueryCache::new(8);
        let k = key(OperationName::ListCrops, json!({ "propriedade_id": "p1" }));

        let guard = match cache.entry(k.clone()).await {
            Entry::Miss(guard) => guard,
            _ => panic!("expected a miss"),
        };

        let mut waiter = match cache.entry(k).await {
            Entry::Wait(receiver) => receiver,
            _ => panic!("second concurrent read must wait"),
        };

        guard.publish(json!({ "culturas": [] })).await;
        assert_eq!(waiter.recv().await.unwrap().unwrap(), json!({ "culturas": [] }));
    }

    #[tokio::test]
    async fn errors_are_broadcast_but_not_cached() {
        let cache = QueryCache::new(8);
        let k = key(OperationName::ListPests, json!({ "propriedade_id": "p1" }));

        match cache.entry(k.clone()).await {
            Entry::Miss(guard) => guard.publish_error(FetchError::Timeout).await,
            _ => panic!("expected a miss"),
        }

        // The failure must not poison the cache: the next read re-fetches.
        assert!(matches!(cache.entry(k).await, Entry::Miss(_)));
    }
}
