//! Test Support Module
//!
//! In-memory doubles for the engine's external collaborators. Usable by
//! this crate's tests and by downstream crates wiring the engine into
//! their own test suites.

pub mod mocks;

pub use mocks::MemoryPersistentTier;
