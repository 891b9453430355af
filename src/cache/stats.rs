//! Cache Statistics Module
//!
//! Tracks engine metrics across both tiers: hits per tier, misses,
//! evictions and swallowed persistence failures.

use serde::Serialize;

// == Cache Stats ==
/// Engine performance counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered by the fast tier
    pub fast_hits: u64,
    /// Lookups answered by the persistent tier (and promoted)
    pub persistent_hits: u64,
    /// Lookups answered by neither tier (absent or expired everywhere)
    pub misses: u64,
    /// Entries pushed out of the fast tier by capacity pressure
    pub evictions: u64,
    /// Persistent-tier operations that failed and were downgraded
    pub persistence_failures: u64,
    /// Current number of fast-tier entries
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups answered by either tier; 0.0 with no lookups.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.fast_hits + self.persistent_hits;
        let total = hits + self.misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    // == Recorders ==
    pub fn record_fast_hit(&mut self) {
        self.fast_hits += 1;
    }

    pub fn record_persistent_hit(&mut self) {
        self.persistent_hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_persistence_failure(&mut self) {
        self.persistence_failures += 1;
    }

    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.fast_hits, 0);
        assert_eq!(stats.persistent_hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.persistence_failures, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_both_tiers() {
        let mut stats = CacheStats::new();
        stats.record_fast_hit();
        stats.record_persistent_hit();
        stats.record_miss();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_hit_rate_all_misses() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_eviction() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_record_persistence_failure() {
        let mut stats = CacheStats::new();
        stats.record_persistence_failure();
        assert_eq!(stats.persistence_failures, 1);
    }

    #[test]
    fn test_set_total_entries() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        assert_eq!(stats.total_entries, 42);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_fast_hit();
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"fast_hits\":1"));
    }
}
