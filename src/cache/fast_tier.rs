//! Fast Tier Module
//!
//! The in-process cache level: a bounded key-to-entry map with LRU
//! eviction. Purely mechanical: expiry policy lives in the engine, so a
//! raw `get` here refreshes recency even for an entry the engine is about
//! to discard as expired.

use std::collections::HashMap;

use crate::cache::{CacheEntry, LruTracker};

// == Fast Tier ==
/// Bounded, recency-ordered key-to-entry storage.
///
/// Invariant: `len() <= max_size()` after every operation. Recency is
/// refreshed on every `get` hit and every `put`.
#[derive(Debug)]
pub struct FastTier<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Maximum number of entries allowed
    max_size: usize,
}

impl<V> FastTier<V> {
    // == Constructor ==
    /// Creates a new fast tier holding at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            max_size,
        }
    }

    // == Get ==
    /// Looks up an entry, refreshing its recency on hit.
    pub fn get(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        if self.entries.contains_key(key) {
            self.lru.touch(key);
        }
        self.entries.get(key)
    }

    // == Put ==
    /// Inserts or replaces an entry at the most-recently-used position.
    ///
    /// Inserting a NEW key at capacity first evicts the least recently
    /// used entry; the evicted key is returned so the caller can record
    /// it. Replacing an existing key never triggers eviction, which also
    /// makes concurrent re-promotion of the same key safe: the second
    /// `put` replaces rather than double-counting against capacity.
    pub fn put(&mut self, key: String, entry: CacheEntry<V>) -> Option<String> {
        if self.max_size == 0 {
            return None;
        }

        let mut evicted = None;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        self.lru.touch(&key);
        self.entries.insert(key, entry);
        evicted
    }

    // == Delete ==
    /// Removes an entry; returns whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    // == Contains ==
    /// Checks for a key without refreshing recency (inspection only).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Max Size ==
    /// Returns the fixed capacity bound.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TTL: Duration = Duration::from_secs(300);

    fn entry(value: &str) -> CacheEntry<String> {
        CacheEntry::new(value.to_string(), TTL)
    }

    #[test]
    fn test_tier_new() {
        let tier: FastTier<String> = FastTier::new(100);
        assert_eq!(tier.len(), 0);
        assert!(tier.is_empty());
        assert_eq!(tier.max_size(), 100);
    }

    #[test]
    fn test_tier_put_and_get() {
        let mut tier = FastTier::new(100);

        tier.put("key1".to_string(), entry("value1"));
        let got = tier.get("key1").unwrap();

        assert_eq!(got.value, "value1");
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_tier_get_nonexistent() {
        let mut tier: FastTier<String> = FastTier::new(100);
        assert!(tier.get("nonexistent").is_none());
    }

    #[test]
    fn test_tier_delete() {
        let mut tier = FastTier::new(100);

        tier.put("key1".to_string(), entry("value1"));
        assert!(tier.delete("key1"));

        assert!(tier.is_empty());
        assert!(tier.get("key1").is_none());
    }

    #[test]
    fn test_tier_delete_nonexistent() {
        let mut tier: FastTier<String> = FastTier::new(100);
        assert!(!tier.delete("nonexistent"));
    }

    #[test]
    fn test_tier_replace_existing_key() {
        let mut tier = FastTier::new(100);

        tier.put("key1".to_string(), entry("value1"));
        let evicted = tier.put("key1".to_string(), entry("value2"));

        // Replacement is not a capacity eviction
        assert!(evicted.is_none());
        assert_eq!(tier.get("key1").unwrap().value, "value2");
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_tier_lru_eviction() {
        let mut tier = FastTier::new(3);

        tier.put("key1".to_string(), entry("value1"));
        tier.put("key2".to_string(), entry("value2"));
        tier.put("key3".to_string(), entry("value3"));

        // Tier is full, adding key4 evicts key1 (oldest)
        let evicted = tier.put("key4".to_string(), entry("value4"));

        assert_eq!(evicted, Some("key1".to_string()));
        assert_eq!(tier.len(), 3);
        assert!(tier.get("key1").is_none());
        assert!(tier.get("key2").is_some());
        assert!(tier.get("key3").is_some());
        assert!(tier.get("key4").is_some());
    }

    #[test]
    fn test_tier_lru_touch_on_get() {
        let mut tier = FastTier::new(3);

        tier.put("key1".to_string(), entry("value1"));
        tier.put("key2".to_string(), entry("value2"));
        tier.put("key3".to_string(), entry("value3"));

        // Access key1 to make it most recently used
        tier.get("key1");

        // Adding key4 evicts key2 (now oldest)
        let evicted = tier.put("key4".to_string(), entry("value4"));

        assert_eq!(evicted, Some("key2".to_string()));
        assert!(tier.get("key1").is_some());
        assert!(tier.get("key2").is_none());
    }

    #[test]
    fn test_tier_replace_full_does_not_evict() {
        let mut tier = FastTier::new(2);

        tier.put("a".to_string(), entry("1"));
        tier.put("b".to_string(), entry("2"));

        // Replacing while full must not push anything out
        let evicted = tier.put("a".to_string(), entry("1bis"));

        assert!(evicted.is_none());
        assert_eq!(tier.len(), 2);
        assert!(tier.contains("a"));
        assert!(tier.contains("b"));
    }

    #[test]
    fn test_tier_contains_does_not_touch() {
        let mut tier = FastTier::new(2);

        tier.put("a".to_string(), entry("1"));
        tier.put("b".to_string(), entry("2"));

        // Inspecting "a" must not protect it from eviction
        assert!(tier.contains("a"));
        let evicted = tier.put("c".to_string(), entry("3"));

        assert_eq!(evicted, Some("a".to_string()));
    }

    #[test]
    fn test_tier_clear() {
        let mut tier = FastTier::new(100);

        tier.put("key1".to_string(), entry("value1"));
        tier.put("key2".to_string(), entry("value2"));
        tier.clear();

        assert!(tier.is_empty());
        assert!(tier.get("key1").is_none());

        // Usable again after clear
        tier.put("key3".to_string(), entry("value3"));
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_tier_zero_capacity_stores_nothing() {
        let mut tier = FastTier::new(0);

        tier.put("key1".to_string(), entry("value1"));

        assert!(tier.is_empty());
        assert!(tier.get("key1").is_none());
    }

    #[test]
    fn test_tier_size_bound_holds() {
        let mut tier = FastTier::new(2);

        for i in 0..10 {
            tier.put(format!("key{i}"), entry("v"));
            assert!(tier.len() <= 2);
        }
    }
}
