//! In-memory, sharded result store
//!
//! Entries live until the store is dropped; there is no expiry and no
//! eviction. Alongside the entries the store keeps one async lock per key so
//! that every caller sharing the store runs a key's aggregation at most once.

use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex as AsyncMutex;

/// Key-addressed memo table shared by every query type.
///
/// `get` hands back a clone of the stored value. Store `Arc`-backed values to
/// get the same allocation back on every read.
pub struct ResultStore<K, V> {
    entries: DashMap<K, V>,
    in_flight: DashMap<K, Arc<AsyncMutex<()>>>,
    shard_count: usize,
}

impl<K, V> ResultStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a store with at least `shard_count` shards.
    ///
    /// The count is rounded up to a power of two, minimum 2.
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(2).next_power_of_two();
        Self {
            entries: DashMap::with_shard_amount(shard_count),
            in_flight: DashMap::with_shard_amount(shard_count),
            shard_count,
        }
    }

    /// Whether a value has been stored under `key`
    pub fn exists(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// The value stored under `key`, if any
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn put(&self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// The lock serializing aggregation for `key` across every store user
    pub fn flight_lock(&self, key: &K) -> Arc<AsyncMutex<()>> {
        Arc::clone(self.in_flight.entry(key.clone()).or_default().value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shard_count(&self) -> usize {
        self.shard_count
    }
}

impl<K, V> std::fmt::Debug for ResultStore<K, V>
where
    K: Hash + Eq,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultStore")
            .field("entries", &self.entries.len())
            .field("shards", &self.shard_count)
            .finish()
    }
}
