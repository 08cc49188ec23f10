//! File-backed storage slot

use crate::core::error::StorageError;
use crate::storage::StorageSlot;
use std::path::{Path, PathBuf};

/// A storage slot backed by a single file on disk.
///
/// A missing file reads as an empty slot. The parent directory is created
/// on first write.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at `path`. Nothing is touched on disk until the first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this slot.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| StorageError::Io {
                message: format!("{}: {}", self.path.display(), e),
            })
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                    message: format!("{}: {}", parent.display(), e),
                })?;
            }
        }
        std::fs::write(&self.path, payload).map_err(|e| StorageError::Io {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}
