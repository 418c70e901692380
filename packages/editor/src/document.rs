//! # Document Handle
//!
//! The editing state behind one style document: the default block name, the
//! element forest, the selected visible index and the id generator.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Render → Save
//!   ↓      ↓       ↓       ↓
//! Store Mutations HTML/CSS Store
//! ```
//!
//! A document always holds at least one root element. Loading from a store
//! replaces everything at once; a failed load leaves the document as it was.

use crate::mutations::{clamp_selection, Mutation, MutationResult};
use crate::selection;
use crate::store::{SaveOutcome, StyleStore};
use crate::template;
use crate::EditorError;
use bemforge_model::{check_ids, Element, ElementId, Forest, IdGenerator, StyleDocument};
use tracing::{debug, info};

pub const DEFAULT_BLOCK_NAME: &str = "component";

/// Editable style document
#[derive(Debug, Clone)]
pub struct Document {
    /// Current version number (increments on each mutation)
    pub version: u64,

    pub(crate) block_name: String,
    pub(crate) forest: Forest,
    pub(crate) selected_index: usize,
    pub(crate) ids: IdGenerator,
}

/// The parts of a document that undo and redo restore.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    pub block_name: String,
    pub forest: Forest,
    pub selected_index: usize,
}

impl Document {
    /// Create a document over an existing forest. The forest must not be
    /// empty and its ids must pass [`check_ids`].
    pub fn new(block_name: impl Into<String>, forest: Forest) -> Result<Self, EditorError> {
        if forest.is_empty() {
            return Err(EditorError::EmptyDocument);
        }
        check_ids(&forest)?;
        let ids = IdGenerator::for_forest(&forest)?;
        Ok(Self {
            version: 0,
            block_name: block_name.into(),
            forest,
            selected_index: 0,
            ids,
        })
    }

    /// The starter document: a single `main` element with every style
    /// property present but disabled.
    pub fn main() -> Self {
        let mut ids = IdGenerator::new();
        let forest = Forest::from_roots([template::main_element(ids.new_id())]);
        Self {
            version: 0,
            block_name: DEFAULT_BLOCK_NAME.to_string(),
            forest,
            selected_index: 0,
            ids,
        }
    }

    pub fn from_snapshot(snapshot: StyleDocument) -> Result<Self, EditorError> {
        let snapshot = snapshot.normalized();
        Self::new(snapshot.block_name, snapshot.elements)
    }

    pub fn snapshot(&self) -> StyleDocument {
        StyleDocument::new(self.block_name.clone(), self.forest.clone())
    }

    /// Load a document from `store`.
    pub fn load(store: &dyn StyleStore) -> Result<Self, EditorError> {
        let doc = Self::from_snapshot(store.load()?)?;
        info!(
            block = %doc.block_name,
            elements = doc.forest.node_count(),
            "Loaded style document"
        );
        Ok(doc)
    }

    /// Replace this document's content with what `store` holds.
    pub fn reload_from(&mut self, store: &dyn StyleStore) -> Result<(), EditorError> {
        let loaded = Self::load(store)?;
        self.block_name = loaded.block_name;
        self.forest = loaded.forest;
        self.selected_index = 0;
        self.version += 1;
        // never hand out an id the previous content used
        if self.ids.peek() < loaded.ids.peek() {
            self.ids = loaded.ids;
        }
        Ok(())
    }

    pub fn save(&self, store: &mut dyn StyleStore) -> SaveOutcome {
        store.save(&self.snapshot())
    }

    pub fn block_name(&self) -> &str {
        &self.block_name
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The selected element. Only `None` if the forest is empty, which a
    /// document never is.
    pub fn selected(&self) -> Option<&Element> {
        selection::resolve(&self.forest, self.selected_index)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected().map(|el| el.id)
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        self.version += 1;
        let created = mutation.apply(self);
        clamp_selection(self);

        debug!(
            mutation = mutation.name(),
            target = ?mutation.target(),
            created = ?created,
            version = self.version,
            selected = self.selected_index,
            "Applied mutation"
        );

        MutationResult {
            version: self.version,
            created,
            selected_index: self.selected_index,
        }
    }

    pub fn state(&self) -> DocumentState {
        DocumentState {
            block_name: self.block_name.clone(),
            forest: self.forest.clone(),
            selected_index: self.selected_index,
        }
    }

    /// Put back an earlier state. The id generator is not rewound.
    pub fn restore(&mut self, state: DocumentState) {
        self.block_name = state.block_name;
        self.forest = state.forest;
        self.selected_index = state.selected_index;
        self.version += 1;
        clamp_selection(self);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::main()
    }
}
