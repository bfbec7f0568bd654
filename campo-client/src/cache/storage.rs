use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;

pub(crate) trait KeyType: Clone + fmt::Debug + Hash + Eq + Send + Sync {}
pub(crate) trait ValueType: Clone + Send + Sync {}

// Blanket implementations which satisfy the compiler
impl<K> KeyType for K where K: Clone + fmt::Debug + Hash + Eq + Send + Sync {}
impl<V> ValueType for V where V: Clone + Send + Sync {}

/// In-memory LRU storage for query results. Entries never expire on their
/// own; they leave through invalidation or eviction.
#[derive(Clone)]
pub(crate) struct CacheStorage<K: KeyType, V: ValueType> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> CacheStorage<K, V>
where
    K: KeyType,
    V: ValueType,
{
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub(crate) async fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    pub(crate) async fn insert(&self, key: K, value: V) {
        self.inner.lock().await.put(key, value);
    }

    /// Remove every entry whose key matches, returning how many went.
    pub(crate) async fn remove_where(&self, predicate: impl Fn(&K) -> bool) -> usize {
        let mut guard = self.inner.lock().await;
        let doomed: Vec<K> = guard
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &doomed {
            guard.pop(key);
        }
        doomed.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
