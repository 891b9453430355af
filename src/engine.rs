//! Cache Engine Module
//!
//! Orchestrates lookups, writes and invalidation across the fast tier
//! and the optional persistent tier. Owns every policy decision:
//! expiry-on-access, promotion, write-through, and failure isolation.
//!
//! The engine never fails outward because of the persistent tier. Every
//! persistence error is logged and downgraded: a failed read becomes a
//! miss, a failed write leaves the fast tier authoritative, a failed
//! delete or clear is best-effort.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats, FastTier};
use crate::config::CacheConfig;
use crate::persistent::PersistentTier;

// == Set Options ==
/// Per-call options for [`CacheEngine::set`].
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// TTL for this entry; the engine's default TTL when None
    pub ttl: Option<Duration>,
    /// Whether to also write through to the persistent tier
    pub persist: bool,
}

impl SetOptions {
    /// Options with an explicit TTL, fast tier only.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            persist: false,
        }
    }

    /// Options requesting write-through to the persistent tier.
    pub fn persisted() -> Self {
        Self {
            ttl: None,
            persist: true,
        }
    }

    /// Requests write-through on top of the current options.
    pub fn and_persist(mut self) -> Self {
        self.persist = true;
        self
    }
}

// == Fast State ==
/// Fast tier plus its counters, guarded together.
///
/// This is the only mutable state the engine owns. The lock around it is
/// held across the synchronous tier manipulation only, never across a
/// persistent-tier call, so slow I/O cannot block other cache accesses.
#[derive(Debug)]
struct FastState<V> {
    tier: FastTier<V>,
    stats: CacheStats,
}

// == Cache Engine ==
/// Two-tier cache: a bounded in-process LRU level in front of an
/// optional slower durable level.
///
/// Callers interact with the engine exclusively; the fast tier is never
/// exposed. Construct one instance at startup and hand out references;
/// all methods take `&self`.
pub struct CacheEngine<V> {
    /// Fast tier and stats behind a single lock
    fast: RwLock<FastState<V>>,
    /// Shared durable store; referenced, never owned or reset
    persistent: Option<Arc<dyn PersistentTier<V>>>,
    /// TTL applied when a set carries none
    default_ttl: Duration,
}

impl<V> CacheEngine<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an engine with no persistent tier behind it.
    pub fn new(config: CacheConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates an engine backed by the given persistent tier.
    pub fn with_persistent(config: CacheConfig, persistent: Arc<dyn PersistentTier<V>>) -> Self {
        Self::build(config, Some(persistent))
    }

    fn build(config: CacheConfig, persistent: Option<Arc<dyn PersistentTier<V>>>) -> Self {
        Self {
            fast: RwLock::new(FastState {
                tier: FastTier::new(config.max_size),
                stats: CacheStats::new(),
            }),
            persistent,
            default_ttl: config.default_ttl,
        }
    }

    // == Get ==
    /// Looks up a value: fast tier first, then the persistent tier.
    ///
    /// A live fast-tier hit refreshes recency and returns immediately. An
    /// expired fast-tier entry is deleted and the lookup falls through to
    /// the persistent tier. A live persistent hit is promoted into the
    /// fast tier (subject to normal eviction) before being returned; an
    /// expired persistent entry triggers a best-effort delete. Returns
    /// None on a full miss or any persistent-tier failure.
    pub async fn get(&self, key: &str) -> Option<V> {
        let now = current_timestamp_ms();

        // Fast tier, under the lock, dropped before any await
        {
            let mut state = self.fast.write().await;
            if let Some(entry) = state.tier.get(key) {
                if entry.is_live_at(now) {
                    debug!(key, ttl_ms = entry.ttl_remaining_ms(), "fast tier hit");
                    let value = entry.value.clone();
                    state.stats.record_fast_hit();
                    return Some(value);
                }
                debug!(key, "fast tier entry expired");
                state.tier.delete(key);
            }
        }

        let Some(persistent) = &self.persistent else {
            self.fast.write().await.stats.record_miss();
            return None;
        };

        match persistent.get(key).await {
            Ok(Some(entry)) if entry.is_live_at(now) => {
                debug!(key, "persistent tier hit");
                let value = entry.value.clone();
                let mut state = self.fast.write().await;
                if let Some(evicted) = state.tier.put(key.to_string(), entry) {
                    debug!(key, evicted = %evicted, "eviction during promotion");
                    state.stats.record_eviction();
                }
                state.stats.record_persistent_hit();
                Some(value)
            }
            Ok(Some(_)) => {
                debug!(key, "persistent tier entry expired");
                let deleted = persistent.delete(key).await;
                let mut state = self.fast.write().await;
                if let Err(err) = deleted {
                    warn!(key, %err, "could not drop expired persistent entry");
                    state.stats.record_persistence_failure();
                }
                state.stats.record_miss();
                None
            }
            Ok(None) => {
                debug!(key, "miss in both tiers");
                self.fast.write().await.stats.record_miss();
                None
            }
            Err(err) => {
                error!(key, %err, "persistent tier read failed, treating as miss");
                let mut state = self.fast.write().await;
                state.stats.record_persistence_failure();
                state.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value in the fast tier, optionally writing through.
    ///
    /// The fast-tier write always happens, synchronously under the lock,
    /// whatever `persist` says. A write-through failure is logged and
    /// swallowed: the call still succeeds and the fast tier remains
    /// authoritative for the value just stored.
    pub async fn set(&self, key: &str, value: V, options: SetOptions) {
        let ttl = options.ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, ttl);

        {
            let mut state = self.fast.write().await;
            if let Some(evicted) = state.tier.put(key.to_string(), entry.clone()) {
                debug!(key, evicted = %evicted, "eviction on set");
                state.stats.record_eviction();
            }
        }

        if !options.persist {
            return;
        }
        match &self.persistent {
            Some(persistent) => {
                if let Err(err) = persistent.put(key, entry).await {
                    error!(key, %err, "persistent tier write failed, entry is not durable");
                    self.fast.write().await.stats.record_persistence_failure();
                }
            }
            None => {
                debug!(key, "persist requested but no persistent tier configured");
            }
        }
    }

    // == Invalidate ==
    /// Removes a key from both tiers.
    ///
    /// The fast-tier delete is synchronous and unconditional; the
    /// persistent delete is best-effort.
    pub async fn invalidate(&self, key: &str) {
        self.fast.write().await.tier.delete(key);
        debug!(key, "invalidated");

        if let Some(persistent) = &self.persistent {
            if let Err(err) = persistent.delete(key).await {
                error!(key, %err, "persistent tier delete failed");
                self.fast.write().await.stats.record_persistence_failure();
            }
        }
    }

    // == Clear ==
    /// Empties both tiers. The persistent clear is best-effort.
    pub async fn clear(&self) {
        self.fast.write().await.tier.clear();
        debug!("fast tier cleared");

        if let Some(persistent) = &self.persistent {
            if let Err(err) = persistent.clear().await {
                error!(%err, "persistent tier clear failed");
                self.fast.write().await.stats.record_persistence_failure();
            }
        }
    }

    // == Inspection ==
    /// Current number of fast-tier entries (expired ones included, until
    /// they are touched or evicted).
    pub async fn len(&self) -> usize {
        self.fast.read().await.tier.len()
    }

    /// Whether `key` currently occupies a fast-tier slot. Does not
    /// refresh recency and does not consult the persistent tier.
    pub async fn is_cached(&self, key: &str) -> bool {
        self.fast.read().await.tier.contains(key)
    }

    /// Snapshot of the engine counters.
    pub async fn stats(&self) -> CacheStats {
        let state = self.fast.read().await;
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.tier.len());
        stats
    }
}
