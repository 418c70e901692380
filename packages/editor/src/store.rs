//! # Persistence boundary
//!
//! A [`StyleStore`] loads and saves whole [`StyleDocument`] snapshots.
//! Loading fails loudly; saving reports a [`SaveOutcome`] so a front end can
//! show the message without unwinding.

use bemforge_model::{SnapshotError, StyleDocument};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("No style document stored")]
    Missing,
}

/// Result of a save, reported rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

impl SaveOutcome {
    pub fn saved(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub trait StyleStore {
    fn load(&self) -> Result<StyleDocument, StoreError>;

    fn save(&mut self, document: &StyleDocument) -> SaveOutcome;
}

/// Style document kept as pretty-printed JSON on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn write(&self, document: &StyleDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = document.to_json_pretty()?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StyleStore for FileStore {
    fn load(&self) -> Result<StyleDocument, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::Missing);
        }
        let json = std::fs::read_to_string(&self.path)?;
        let document = StyleDocument::from_json(&json)?;
        info!(path = %self.path.display(), "Read style document");
        Ok(document)
    }

    fn save(&mut self, document: &StyleDocument) -> SaveOutcome {
        match self.write(document) {
            Ok(()) => {
                info!(path = %self.path.display(), "Saved style document");
                SaveOutcome::saved(format!("Saved to {}", self.path.display()))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to save style document");
                SaveOutcome::failed(format!("Failed to save {}: {}", self.path.display(), e))
            }
        }
    }
}

/// In-memory store, optionally refusing every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Option<StyleDocument>,
    reject_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: StyleDocument) -> Self {
        Self {
            document: Some(document),
            reject_saves: false,
        }
    }

    /// A store whose saves always fail.
    pub fn rejecting() -> Self {
        Self {
            document: None,
            reject_saves: true,
        }
    }

    pub fn document(&self) -> Option<&StyleDocument> {
        self.document.as_ref()
    }
}

impl StyleStore for MemoryStore {
    fn load(&self) -> Result<StyleDocument, StoreError> {
        self.document.clone().ok_or(StoreError::Missing)
    }

    fn save(&mut self, document: &StyleDocument) -> SaveOutcome {
        if self.reject_saves {
            return SaveOutcome::failed("Store is read-only");
        }
        self.document = Some(document.clone());
        SaveOutcome::saved("Saved")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemforge_model::{Element, ElementId, Forest};

    fn sample() -> StyleDocument {
        StyleDocument::new(
            "card",
            Forest::from_roots([Element::new(ElementId(1), "Card").with_child(Element::new(ElementId(2), "Title"))]),
        )
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/doc.json"));

        let outcome = store.save(&sample());
        assert!(outcome.success, "{}", outcome.message);
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load(), Err(StoreError::Missing)));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Snapshot(_))));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut store = MemoryStore::rejecting();
        let outcome = store.save(&sample());
        assert!(!outcome.success);
        assert!(store.document().is_none());
    }
}
