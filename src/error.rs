//! Error types for the persistent-tier boundary
//!
//! Provides the failure taxonomy using thiserror.

use thiserror::Error;

// == Persistence Error Enum ==
/// Failure modes of the persistent tier.
///
/// These errors exist only at the [`PersistentTier`] boundary: the engine
/// catches every variant, logs it, and degrades the operation (a read
/// failure becomes a miss, a write failure a non-durable write). They are
/// never surfaced to engine callers.
///
/// [`PersistentTier`]: crate::persistent::PersistentTier
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Underlying store failed while reading an entry
    #[error("persistent tier read failed: {0}")]
    Read(String),

    /// Underlying store failed while writing an entry
    #[error("persistent tier write failed: {0}")]
    Write(String),

    /// Underlying store failed while deleting an entry
    #[error("persistent tier delete failed: {0}")]
    Delete(String),

    /// Underlying store failed while clearing all entries
    #[error("persistent tier clear failed: {0}")]
    Clear(String),
}

// == Result Type Alias ==
/// Convenience Result type for persistent-tier operations.
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
