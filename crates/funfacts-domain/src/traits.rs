//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Flat string-keyed persistent storage
///
/// Implemented by the infrastructure layer (funfacts-store). Values are opaque
/// strings; the score manager stores JSON documents in them.
pub trait KeyValueStore {
    /// Error type for store operations
    type Error;

    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;
}
