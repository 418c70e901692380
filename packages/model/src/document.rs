//! Snapshot exchanged with persistence: the block name plus the whole forest.
//!
//! Serialized as `{"blockName": "...", "elements": [...]}` with camelCase
//! element fields.

use crate::element::{Element, ElementId};
use crate::forest::Forest;
use crate::id_generator::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid style document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style document has no elements")]
    Empty,

    #[error("Element id {0} appears more than once")]
    DuplicateId(ElementId),

    #[error("Element id {0} leaves no room for new elements")]
    IdOutOfRange(ElementId),
}

/// Every id in `forest` is unique and below [`IdGenerator::MAX_ID`].
pub fn check_ids(forest: &Forest) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();
    for element in forest.flatten() {
        if element.id.0 >= IdGenerator::MAX_ID {
            return Err(SnapshotError::IdOutOfRange(element.id));
        }
        if !seen.insert(element.id) {
            return Err(SnapshotError::DuplicateId(element.id));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDocument {
    pub block_name: String,
    pub elements: Forest,
}

impl StyleDocument {
    pub fn new(block_name: impl Into<String>, elements: Forest) -> Self {
        Self {
            block_name: block_name.into(),
            elements,
        }
    }

    /// Parse and check that the forest is usable for editing.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let doc: StyleDocument = serde_json::from_str(json)?;
        if doc.elements.is_empty() {
            return Err(SnapshotError::Empty);
        }
        check_ids(&doc.elements)?;
        Ok(doc.normalized())
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rewrite `parent_id`s from the tree structure. Saved documents store
    /// them redundantly and hand-edited files get them wrong.
    pub fn normalized(mut self) -> Self {
        for root in self.elements.roots_mut() {
            let root = Arc::make_mut(root);
            root.parent_id = None;
            fix_parent_ids(root);
        }
        self
    }
}

fn fix_parent_ids(element: &mut Element) {
    let id = element.id;
    for child in &mut element.children {
        let child = Arc::make_mut(child);
        child.parent_id = Some(id);
        fix_parent_ids(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let doc = StyleDocument::new(
            "btn",
            Forest::from_roots([Element::new(ElementId(1), "Hi").with_property("backgroundColor", "red")]),
        );
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["blockName"], "btn");
        assert_eq!(value["elements"][0]["id"], 1);
        assert_eq!(value["elements"][0]["properties"]["backgroundColor"], "red");
        assert_eq!(value["elements"][0]["parentId"], serde_json::Value::Null);
    }

    #[test]
    fn test_from_json_repairs_parent_ids() {
        let json = r#"{
            "blockName": "card",
            "elements": [{
                "id": 1, "text": "root", "elementName": "", "modifiers": [],
                "properties": {}, "parentId": null, "expanded": true,
                "children": [{
                    "id": 2, "text": "child", "elementName": "", "modifiers": [],
                    "properties": {}, "parentId": 99, "expanded": true, "children": []
                }]
            }]
        }"#;
        let doc = StyleDocument::from_json(json).unwrap();
        assert_eq!(doc.elements.find(ElementId(2)).unwrap().parent_id, Some(ElementId(1)));
    }

    #[test]
    fn test_empty_document_rejected() {
        let err = StyleDocument::from_json(r#"{"blockName": "x", "elements": []}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Empty));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "blockName": "card",
            "elements": [
                { "id": 1, "text": "a", "children": [
                    { "id": 2, "text": "first", "children": [] }
                ] },
                { "id": 2, "text": "second", "children": [] }
            ]
        }"#;
        let err = StyleDocument::from_json(json).unwrap_err();
        assert!(matches!(err, SnapshotError::DuplicateId(ElementId(2))));
    }

    #[test]
    fn test_largest_id_rejected() {
        let json = r#"{
            "blockName": "card",
            "elements": [{ "id": 18446744073709551615, "text": "a", "children": [] }]
        }"#;
        let err = StyleDocument::from_json(json).unwrap_err();
        assert!(matches!(err, SnapshotError::IdOutOfRange(ElementId(u64::MAX))));
    }
}
