//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each entry keeps the document state before and after it ran. Forests
//!   share unchanged subtrees, so a snapshot costs roughly the edited path.
//! - Undo restores the before state and moves the entry to the redo stack
//! - Redo restores the after state
//! - New mutations clear the redo stack
//! - Pure selection changes are applied but not recorded
//! - Supports batched operations (group multiple mutations as one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut doc = Document::main();
//!
//! stack.apply(Mutation::SetText { target, text: "Hi".into() }, &mut doc);
//! stack.undo(&mut doc);
//! stack.redo(&mut doc);
//! ```

use crate::document::{Document, DocumentState};
use crate::mutations::{Mutation, MutationResult};

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// Document state before the first mutation
    pub before: DocumentState,

    /// Document state after the last mutation
    pub after: DocumentState,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A batch still collecting mutations.
#[derive(Debug, Default)]
struct OpenBatch {
    mutations: Vec<Mutation>,
    before: Option<DocumentState>,
    after: Option<DocumentState>,
    description: Option<String>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied batches (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone batches (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<OpenBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: Mutation, doc: &mut Document) -> MutationResult {
        if mutation.is_selection_only() {
            return doc.apply(mutation);
        }

        let before = doc.state();
        let result = doc.apply(mutation.clone());
        let after = doc.state();

        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation);
            batch.before.get_or_insert(before);
            batch.after = Some(after);
        } else {
            self.push_batch(MutationBatch {
                mutations: vec![mutation],
                before,
                after,
                description: None,
            });
        }

        result
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(OpenBatch::default());
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if let (Some(before), Some(after)) = (batch.before, batch.after) {
                self.push_batch(MutationBatch {
                    mutations: batch.mutations,
                    before,
                    after,
                    description: batch.description,
                });
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent mutation/batch
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.undo_stack.pop() {
            Some(batch) => {
                doc.restore(batch.before.clone());
                self.redo_stack.push(batch);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone mutation/batch
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(batch) => {
                doc.restore(batch.after.clone());
                self.undo_stack.push(batch);
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
