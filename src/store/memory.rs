//! In-memory storage implementation

use super::entry::Entry;
use super::value::Value;
use bytes::Bytes;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use siphasher::sip::SipHasher13;

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<Bytes, Entry, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value store
///
/// This is the storage primitive for the engine: a single-threaded map
/// from key to entry. Expiration is cooperative; callers are expected to
/// run `sweep_expired` before reading, so lookups have no side effects.
pub struct MemoryStore {
    /// The main storage map
    store: StoreMap,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            store: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Get a value by key, returns None if not found
    pub fn get(&self, key: &Bytes) -> Option<&Value> {
        self.store.get(key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &Bytes) -> Option<&mut Value> {
        self.store.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Replace the value at key.
    ///
    /// Expiration is left untouched for an existing key; callers decide
    /// whether a write clears or keeps the TTL.
    pub fn set(&mut self, key: impl Into<Bytes>, value: Value) {
        let key = key.into();
        match self.store.get_mut(&key) {
            Some(entry) => entry.value = value,
            None => {
                self.store.insert(key, Entry::new(value));
            }
        }
    }

    /// Delete a key and its expiration, returns true if the key existed
    pub fn delete(&mut self, key: &Bytes) -> bool {
        self.store.remove(key).is_some()
    }

    /// Check if a key exists
    pub fn contains(&self, key: &Bytes) -> bool {
        self.store.contains_key(key)
    }

    /// Attach an absolute expiration timestamp (epoch seconds) to a key.
    ///
    /// Returns false when the key does not exist; an expiration is only
    /// ever carried by a live entry.
    pub fn set_expiration(&mut self, key: &Bytes, at: f64) -> bool {
        match self.store.get_mut(key) {
            Some(entry) => {
                entry.expire_at = Some(at);
                true
            }
            None => false,
        }
    }

    /// Remove the expiration of a key, returns true if one was set
    pub fn clear_expiration(&mut self, key: &Bytes) -> bool {
        match self.store.get_mut(key) {
            Some(entry) => entry.expire_at.take().is_some(),
            None => false,
        }
    }

    /// Get the expiration timestamp of a key, if any
    pub fn expiration(&self, key: &Bytes) -> Option<f64> {
        self.store.get(key).and_then(|entry| entry.expire_at)
    }

    /// Remove every key whose expiration is at or before `now`.
    ///
    /// Returns the number of keys removed. Must run before each command so
    /// that no command observes a logically expired key.
    pub fn sweep_expired(&mut self, now: f64) -> usize {
        let expired: Vec<Bytes> = self
            .store
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.store.remove(key);
        }
        expired.len()
    }

    /// Get the number of stored keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
