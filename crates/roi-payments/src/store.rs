//! Access Flag Storage
//!
//! The unlock flag is the only durable state in the system: a single
//! key/value pair read at startup and written once on unlock. The trait is
//! the injection seam that keeps the gate testable without a browser; the
//! frontend provides a localStorage-backed implementation.

use std::sync::RwLock;

use crate::error::Result;

/// Storage key for the unlock flag.
pub const ACCESS_KEY: &str = "roiCalculatorAccess";

/// The only value ever stored under [`ACCESS_KEY`].
pub const ACCESS_VALUE: &str = "true";

/// Durable access-flag store.
pub trait AccessStore {
    /// Read the stored flag; false when nothing was ever written.
    fn load(&self) -> Result<bool>;

    /// Persist the flag. There is no operation to clear it.
    fn set_unlocked(&self) -> Result<()>;
}

/// In-memory store (for tests and native harnesses).
#[derive(Debug, Default)]
pub struct MemoryAccessStore {
    unlocked: RwLock<bool>,
}

impl MemoryAccessStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-unlocked store, standing in for a prior session's flag.
    #[must_use]
    pub fn unlocked() -> Self {
        Self {
            unlocked: RwLock::new(true),
        }
    }
}

impl AccessStore for MemoryAccessStore {
    fn load(&self) -> Result<bool> {
        Ok(*self.unlocked.read().unwrap())
    }

    fn set_unlocked(&self) -> Result<()> {
        *self.unlocked.write().unwrap() = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_locked() {
        let store = MemoryAccessStore::new();
        assert!(!store.load().unwrap());
    }

    #[test]
    fn test_memory_store_persists_unlock() {
        let store = MemoryAccessStore::new();
        store.set_unlocked().unwrap();
        assert!(store.load().unwrap());
    }
}
