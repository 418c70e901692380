//! Error types for the editor

use bemforge_model::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Document has no elements")]
    EmptyDocument,
}
