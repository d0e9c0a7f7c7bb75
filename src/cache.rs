//! Read-mostly caches populated on first access.
//!
//! Each slot owns its own lock. A reader holding the shared lock either sees
//! nothing or a complete value: a value is only stored after its fetch
//! succeeded, under the exclusive lock. Two callers racing on an empty slot
//! may both fetch; the second write replaces the first with an equivalent
//! value.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::types::RiotApiResponse;

#[derive(Debug)]
pub struct LazyCache<T> {
    slot: RwLock<Option<T>>,
}

impl<T> Default for LazyCache<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T: Clone> LazyCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the cached value, fetching it first if the slot is empty.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> RiotApiResponse<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RiotApiResponse<T>>,
    {
        if let Some(value) = self.slot.read().await.as_ref() {
            return Ok(value.clone());
        }

        let mut slot = self.slot.write().await;
        let value = fetch().await?;
        *slot = Some(value.clone());

        Ok(value)
    }

    /// Copy of the cached value without fetching.
    pub async fn peek(&self) -> Option<T> {
        self.slot.read().await.clone()
    }

    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.is_some()
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

/// Per-key variant where an entry may be present but still stale.
#[derive(Debug)]
pub struct KeyedCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the entry for `key` if `is_fresh` accepts it, else
    /// fetch and store a new one.
    pub async fn get_or_fetch_where<P, F, Fut>(
        &self,
        key: &K,
        is_fresh: P,
        fetch: F,
    ) -> RiotApiResponse<V>
    where
        P: Fn(&V) -> bool,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RiotApiResponse<V>>,
    {
        if let Some(value) = self.entries.read().await.get(key) {
            if is_fresh(value) {
                return Ok(value.clone());
            }
        }

        let mut entries = self.entries.write().await;
        let value = fetch().await?;
        entries.insert(key.clone(), value.clone());

        Ok(value)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::types::{RiotApiError, StatusError};

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let cache = LazyCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_slot_empty() {
        let cache: LazyCache<Vec<u8>> = LazyCache::new();

        let res = cache
            .get_or_fetch(|| async { Err(RiotApiError::from(StatusError::BadGateway)) })
            .await;

        assert!(res.is_err());
        assert!(!cache.is_populated().await);

        let value = cache.get_or_fetch(|| async { Ok(vec![7]) }).await.unwrap();
        assert_eq!(value, vec![7]);
    }

    #[tokio::test]
    async fn returned_value_is_a_copy() {
        let cache = LazyCache::new();
        let mut value = cache
            .get_or_fetch(|| async { Ok(vec![String::from("Ahri")]) })
            .await
            .unwrap();
        value.push(String::from("Lux"));

        assert_eq!(cache.peek().await, Some(vec![String::from("Ahri")]));
    }

    #[tokio::test]
    async fn clear_forces_a_new_fetch() {
        let cache = LazyCache::new();
        cache.get_or_fetch(|| async { Ok(1) }).await.unwrap();
        cache.clear().await;

        assert_eq!(cache.peek().await, None);
        assert_eq!(cache.get_or_fetch(|| async { Ok(2) }).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn concurrent_readers_see_complete_values() {
        let cache = Arc::new(LazyCache::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch(|| async {
                        tokio::task::yield_now().await;
                        Ok(vec![1u8; 64])
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), vec![1u8; 64]);
        }
    }

    #[tokio::test]
    async fn keyed_cache_refetches_stale_entries() {
        let cache: KeyedCache<String, String> = KeyedCache::new();
        let key = "Ahri".to_string();
        let calls = AtomicUsize::new(0);
        let fresh = |lore: &String| !lore.is_empty();

        cache
            .get_or_fetch_where(&key, fresh, || async { Ok(String::new()) })
            .await
            .unwrap();

        for _ in 0..2 {
            let lore = cache
                .get_or_fetch_where(&key, fresh, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("Vastayan".to_string())
                })
                .await
                .unwrap();
            assert_eq!(lore, "Vastayan");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }
}
