//! # bemforge Editor
//!
//! Editing engine for BEM style documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Element forest + class-name rules    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save through a StyleStore           │
//! │  - Structural and property edits            │
//! │  - Visible-index selection                  │
//! │  - Undo/redo over document snapshots        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers: forest → HTML + CSS text         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Forests are values**: every edit returns a new forest that shares
//!    untouched subtrees with the old one
//! 2. **Edits never fail**: an unknown id is a no-op, not an error
//! 3. **Code is derived**: HTML and CSS are regenerated from the forest and
//!    never edited directly
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bemforge_editor::{Document, FileStore, Mutation, Side};
//!
//! let mut store = FileStore::new("bemforge.json");
//! let mut doc = Document::load(&store)?;
//!
//! let result = doc.apply(Mutation::InsertSibling {
//!     anchor: doc.selected_id(),
//!     side: Side::After,
//! });
//!
//! doc.save(&mut store);
//! ```

mod document;
mod errors;
mod mutations;
mod pipeline;
pub mod properties;
pub mod selection;
mod store;
pub mod structure;
pub mod template;
mod undo_stack;

pub use document::{Document, DocumentState, DEFAULT_BLOCK_NAME};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationResult};
pub use pipeline::{Pipeline, PipelineResult, RenderedCode};
pub use selection::{count_visible, index_of, resolve, visible_elements, VisibleElement};
pub use store::{FileStore, MemoryStore, SaveOutcome, StoreError, StyleStore};
pub use structure::{Edit, Side};
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export model types for convenience
pub use bemforge_model::{Element, ElementId, Forest, StyleDocument, StyleProperty};
