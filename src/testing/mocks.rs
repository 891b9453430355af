//! Mock implementations of the persistent-tier contract
//!
//! Provides an in-memory durable store with failure injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::CacheEntry;
use crate::error::{PersistenceError, PersistenceResult};
use crate::persistent::PersistentTier;

// == Memory Persistent Tier ==
/// In-memory stand-in for a durable key-value store.
///
/// Entries are held as serialized JSON, the same round trip a real store
/// would impose, so type mismatches and serialization bugs surface in
/// tests. Each operation can be made to fail on demand, and an optional
/// per-operation latency widens race windows for concurrency tests.
///
/// # Examples
///
/// ```
/// use tiered_cache::testing::MemoryPersistentTier;
///
/// let store = MemoryPersistentTier::new();
/// store.fail_writes(true);
/// // every put now returns PersistenceError::Write
/// ```
#[derive(Debug, Default)]
pub struct MemoryPersistentTier {
    /// Key to serialized-entry storage
    records: Mutex<HashMap<String, String>>,
    /// Log of operations in call order, e.g. "put key1"
    operations: Mutex<Vec<String>>,
    /// Artificial latency applied to every operation
    latency: Option<Duration>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
    fail_clears: AtomicBool,
}

impl MemoryPersistentTier {
    /// Creates an empty store with no latency and no failures armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that sleeps `latency` inside every operation.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    // == Failure Injection ==
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_clears(&self, fail: bool) {
        self.fail_clears.store(fail, Ordering::SeqCst);
    }

    // == Inspection ==
    /// Number of records currently stored.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether a record exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.records.lock().unwrap().contains_key(key)
    }

    /// Operations seen so far, in call order.
    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }

    // == Internals ==
    async fn simulate_io(&self, op: &str, key: &str) {
        self.operations.lock().unwrap().push(format!("{op} {key}"));
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl<V> PersistentTier<V> for MemoryPersistentTier
where
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> PersistenceResult<Option<CacheEntry<V>>> {
        self.simulate_io("get", key).await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Read("injected read failure".to_string()));
        }

        let records = self.records.lock().unwrap();
        match records.get(key) {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|err| PersistenceError::Read(err.to_string())),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, entry: CacheEntry<V>) -> PersistenceResult<()> {
        self.simulate_io("put", key).await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write("injected write failure".to_string()));
        }

        let json =
            serde_json::to_string(&entry).map_err(|err| PersistenceError::Write(err.to_string()))?;
        self.records.lock().unwrap().insert(key.to_string(), json);
        Ok(())
    }

    async fn delete(&self, key: &str) -> PersistenceResult<()> {
        self.simulate_io("delete", key).await;
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Delete(
                "injected delete failure".to_string(),
            ));
        }

        self.records.lock().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> PersistenceResult<()> {
        self.simulate_io("clear", "*").await;
        if self.fail_clears.load(Ordering::SeqCst) {
            return Err(PersistenceError::Clear("injected clear failure".to_string()));
        }

        self.records.lock().unwrap().clear();
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str) -> CacheEntry<String> {
        CacheEntry::new(value.to_string(), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_mock_roundtrip() {
        let store = MemoryPersistentTier::new();

        store.put("key1", entry("value1")).await.unwrap();
        let got: Option<CacheEntry<String>> = store.get("key1").await.unwrap();

        assert_eq!(got.unwrap().value, "value1");
        assert_eq!(store.record_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_get_absent() {
        let store = MemoryPersistentTier::new();
        let got: Option<CacheEntry<String>> = store.get("missing").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_mock_delete_and_clear() {
        let store = MemoryPersistentTier::new();

        store.put("a", entry("1")).await.unwrap();
        store.put("b", entry("2")).await.unwrap();

        PersistentTier::<String>::delete(&store, "a").await.unwrap();
        assert!(!store.contains("a"));
        assert!(store.contains("b"));

        PersistentTier::<String>::clear(&store).await.unwrap();
        assert_eq!(store.record_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_failure_injection() {
        let store = MemoryPersistentTier::new();

        store.fail_writes(true);
        let result = store.put("key1", entry("value1")).await;
        assert!(matches!(result, Err(PersistenceError::Write(_))));

        store.fail_writes(false);
        store.put("key1", entry("value1")).await.unwrap();

        store.fail_reads(true);
        let result: PersistenceResult<Option<CacheEntry<String>>> = store.get("key1").await;
        assert!(matches!(result, Err(PersistenceError::Read(_))));
    }

    #[tokio::test]
    async fn test_mock_operation_log() {
        let store = MemoryPersistentTier::new();

        store.put("key1", entry("value1")).await.unwrap();
        let _: Option<CacheEntry<String>> = store.get("key1").await.unwrap();

        assert_eq!(store.operations(), vec!["put key1", "get key1"]);
    }
}
