//! In-memory storage slot for testing and ephemeral sessions

use crate::core::error::StorageError;
use crate::storage::StorageSlot;
use std::sync::RwLock;

/// A storage slot held entirely in memory.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RwLock<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a payload, as if a previous session had
    /// written it.
    pub fn seeded(payload: impl Into<String>) -> Self {
        Self {
            payload: RwLock::new(Some(payload.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.read().expect("slot lock poisoned").clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        *self.payload.write().expect("slot lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}
