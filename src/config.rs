//! Configuration Module
//!
//! Engine parameters, fixed at construction time.

use std::env;
use std::time::Duration;

/// Cache engine configuration.
///
/// Both values are fixed when the engine is built; there is no runtime
/// reconfiguration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL applied to entries stored without an explicit TTL
    pub default_ttl: Duration,
    /// Maximum number of entries the fast tier can hold
    pub max_size: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_SECS` - Default TTL in seconds (default: 300)
    /// - `CACHE_MAX_SIZE` - Maximum fast-tier entries (default: 100)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("CACHE_DEFAULT_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE),
        }
    }
}

/// Default time-to-live: 5 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default fast-tier capacity.
const DEFAULT_MAX_SIZE: usize = 100;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}
