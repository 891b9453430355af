//! Persistent Tier Module
//!
//! The contract the engine programs against for its slower durable
//! level. Concrete stores (disk, database, browser storage) live outside
//! this crate; the engine only ever sees this trait.

use async_trait::async_trait;

use crate::cache::CacheEntry;
use crate::error::PersistenceResult;

// == Persistent Tier Trait ==
/// Asynchronous, fallible key-value store backing the fast tier.
///
/// The engine holds a shared reference (`Arc<dyn PersistentTier<V>>`) and
/// never assumes exclusive access: other subsystems or processes may
/// mutate the same keys, and the engine simply re-reads on its next miss.
/// The engine also never closes or resets the store; its lifetime is the
/// owner's concern.
///
/// Implementations decide how entries are serialized; the engine hands
/// over whole [`CacheEntry`] values so expiry survives a round trip
/// through the store.
#[async_trait]
pub trait PersistentTier<V>: Send + Sync {
    /// Fetches the entry stored under `key`, if any.
    async fn get(&self, key: &str) -> PersistenceResult<Option<CacheEntry<V>>>;

    /// Stores `entry` under `key`, replacing any previous entry.
    async fn put(&self, key: &str, entry: CacheEntry<V>) -> PersistenceResult<()>;

    /// Removes the entry under `key`; absent keys are not an error.
    async fn delete(&self, key: &str) -> PersistenceResult<()>;

    /// Removes every entry.
    async fn clear(&self) -> PersistenceResult<()>;
}
