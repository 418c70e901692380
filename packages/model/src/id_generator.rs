use crate::document::SnapshotError;
use crate::element::ElementId;
use crate::forest::Forest;

/// Sequential ID generator for elements within a document
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Largest id handed out. JSON number readers keep integers exact up to here.
    pub const MAX_ID: u64 = (1 << 53) - 1;

    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue numbering after `last`. `None` when no id is left after it.
    pub fn starting_after(last: ElementId) -> Option<Self> {
        if last.0 >= Self::MAX_ID {
            return None;
        }
        last.0.checked_add(1).map(|next| Self { next })
    }

    /// Generator that never hands out an id already present in `forest`.
    pub fn for_forest(forest: &Forest) -> Result<Self, SnapshotError> {
        match forest.max_id() {
            Some(max) => Self::starting_after(max).ok_or(SnapshotError::IdOutOfRange(max)),
            None => Ok(Self::new()),
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `new_id` will return
    pub fn peek(&self) -> ElementId {
        ElementId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
