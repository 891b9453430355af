//! Cache Entry Module
//!
//! Defines the immutable value/expiry pair stored in both tiers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A single cache entry: a value and the instant it stops being valid.
///
/// Entries are never mutated after construction. Refreshing a key means
/// constructing a new entry and replacing the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let expires_at = current_timestamp_ms() + ttl.as_millis() as u64;
        Self { value, expires_at }
    }

    // == Is Live At ==
    /// Checks whether the entry is still valid at `now_ms`.
    ///
    /// Boundary condition: an entry whose `expires_at` equals the current
    /// time is already expired. Liveness requires `expires_at > now`.
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        self.expires_at > now_ms
    }

    /// Checks whether the entry has expired as of the current time.
    pub fn is_expired(&self) -> bool {
        !self.is_live_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
