//! Tiered Cache - a two-level cache engine
//!
//! A fast in-process tier with TTL expiry and LRU eviction, backed by an
//! optional slower persistent tier. The persistent tier is never allowed
//! to fail an engine call: every persistence error is logged and
//! downgraded to a miss or a non-durable write.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tiered_cache::{CacheConfig, CacheEngine, SetOptions};
//! use tiered_cache::testing::MemoryPersistentTier;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(MemoryPersistentTier::new());
//! let engine: CacheEngine<String> =
//!     CacheEngine::with_persistent(CacheConfig::default(), store);
//!
//! engine.set("greeting", "hello".to_string(), SetOptions::persisted()).await;
//! assert_eq!(engine.get("greeting").await, Some("hello".to_string()));
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod persistent;
pub mod testing;

pub use cache::{CacheEntry, CacheStats};
pub use config::CacheConfig;
pub use engine::{CacheEngine, SetOptions};
pub use error::{PersistenceError, PersistenceResult};
pub use persistent::PersistentTier;
