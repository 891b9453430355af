//! Cache Module
//!
//! Storage core for the two-tier engine: the immutable entry type, the
//! O(1) recency tracker, the bounded in-process fast tier and the engine
//! statistics.

mod entry;
mod fast_tier;
mod lru;
mod stats;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use fast_tier::FastTier;
pub use lru::LruTracker;
pub use stats::CacheStats;
