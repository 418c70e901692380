//! # Mutations
//!
//! Every edit a front end can make to a [`Document`], as plain data. A
//! mutation names its target by [`ElementId`] and is applied through
//! [`Document::apply`], which bumps the version and keeps the selection
//! pointing at something sensible.
//!
//! ## Selection after an edit
//!
//! - Inserting or wrapping selects the created element when it is visible.
//! - Removing selects the first element.
//! - Collapsing keeps the current element selected unless it just became
//!   hidden, in which case the toggled element takes over.
//! - `SelectElement` ignores ids that are missing or collapsed away.
//!
//! Mutations never fail. An unknown id leaves the forest as it was.
//!
//! Serialized with a `type` tag, so a batch of edits reads as:
//!
//! ```json
//! [
//!   { "type": "insertChild", "parent": 1 },
//!   { "type": "setProperty", "target": 2, "key": "color", "value": "red" }
//! ]
//! ```

use crate::document::Document;
use crate::properties;
use crate::selection::{count_visible, index_of};
use crate::structure::{self, Edit, Side};
use bemforge_model::{ElementId, StyleProperty};
use serde::{Deserialize, Serialize};

fn cascade_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// New element beside `anchor`, or at the top level when absent.
    InsertSibling {
        #[serde(default)]
        anchor: Option<ElementId>,
        side: Side,
    },

    InsertChild {
        parent: ElementId,
    },

    WrapWithParent {
        target: ElementId,
    },

    RemoveElement {
        target: ElementId,
    },

    ToggleExpanded {
        target: ElementId,
    },

    SelectElement {
        target: ElementId,
    },

    /// Select by visible position. Out of range indices are clamped.
    SelectIndex {
        index: usize,
    },

    /// Default block name of the whole document.
    SetBlockName {
        name: String,
    },

    SetText {
        target: ElementId,
        text: String,
    },

    SetElementName {
        target: ElementId,
        name: String,
    },

    /// Comma separated.
    SetModifiers {
        target: ElementId,
        modifiers: String,
    },

    SetProperty {
        target: ElementId,
        key: StyleProperty,
        value: String,
        #[serde(default = "cascade_by_default")]
        cascade: bool,
    },

    SetPropertyEnabled {
        target: ElementId,
        key: StyleProperty,
        enabled: bool,
        #[serde(default = "cascade_by_default")]
        cascade: bool,
    },

    SetHideElementName {
        target: ElementId,
        hide: bool,
    },

    SetHideModifiers {
        target: ElementId,
        hide: bool,
    },

    SetHideHtmlTag {
        target: ElementId,
        hide: bool,
    },

    SetUseParentBlock {
        target: ElementId,
        enabled: bool,
    },

    SetHtmlTagName {
        target: ElementId,
        tag: String,
    },

    /// Node-local block override; blank clears it.
    SetElementBlockName {
        target: ElementId,
        name: String,
    },

    SetHtmlAttribute {
        target: ElementId,
        name: String,
        value: String,
    },

    RenameHtmlAttribute {
        target: ElementId,
        old_name: String,
        new_name: String,
    },

    DeleteHtmlAttribute {
        target: ElementId,
        name: String,
    },
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertSibling { .. } => "insertSibling",
            Mutation::InsertChild { .. } => "insertChild",
            Mutation::WrapWithParent { .. } => "wrapWithParent",
            Mutation::RemoveElement { .. } => "removeElement",
            Mutation::ToggleExpanded { .. } => "toggleExpanded",
            Mutation::SelectElement { .. } => "selectElement",
            Mutation::SelectIndex { .. } => "selectIndex",
            Mutation::SetBlockName { .. } => "setBlockName",
            Mutation::SetText { .. } => "setText",
            Mutation::SetElementName { .. } => "setElementName",
            Mutation::SetModifiers { .. } => "setModifiers",
            Mutation::SetProperty { .. } => "setProperty",
            Mutation::SetPropertyEnabled { .. } => "setPropertyEnabled",
            Mutation::SetHideElementName { .. } => "setHideElementName",
            Mutation::SetHideModifiers { .. } => "setHideModifiers",
            Mutation::SetHideHtmlTag { .. } => "setHideHtmlTag",
            Mutation::SetUseParentBlock { .. } => "setUseParentBlock",
            Mutation::SetHtmlTagName { .. } => "setHtmlTagName",
            Mutation::SetElementBlockName { .. } => "setElementBlockName",
            Mutation::SetHtmlAttribute { .. } => "setHtmlAttribute",
            Mutation::RenameHtmlAttribute { .. } => "renameHtmlAttribute",
            Mutation::DeleteHtmlAttribute { .. } => "deleteHtmlAttribute",
        }
    }

    /// Element the mutation is aimed at, if any.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Mutation::InsertSibling { anchor, .. } => *anchor,
            Mutation::InsertChild { parent } => Some(*parent),
            Mutation::SelectIndex { .. } | Mutation::SetBlockName { .. } => None,
            Mutation::WrapWithParent { target }
            | Mutation::RemoveElement { target }
            | Mutation::ToggleExpanded { target }
            | Mutation::SelectElement { target }
            | Mutation::SetText { target, .. }
            | Mutation::SetElementName { target, .. }
            | Mutation::SetModifiers { target, .. }
            | Mutation::SetProperty { target, .. }
            | Mutation::SetPropertyEnabled { target, .. }
            | Mutation::SetHideElementName { target, .. }
            | Mutation::SetHideModifiers { target, .. }
            | Mutation::SetHideHtmlTag { target, .. }
            | Mutation::SetUseParentBlock { target, .. }
            | Mutation::SetHtmlTagName { target, .. }
            | Mutation::SetElementBlockName { target, .. }
            | Mutation::SetHtmlAttribute { target, .. }
            | Mutation::RenameHtmlAttribute { target, .. }
            | Mutation::DeleteHtmlAttribute { target, .. } => Some(*target),
        }
    }

    /// Whether the mutation only moves the selection.
    pub fn is_selection_only(&self) -> bool {
        matches!(self, Mutation::SelectElement { .. } | Mutation::SelectIndex { .. })
    }

    /// Apply to `doc`, returning the id of any element created.
    pub(crate) fn apply(&self, doc: &mut Document) -> Option<ElementId> {
        match self {
            Mutation::InsertSibling { anchor, side } => {
                let edit = structure::insert_sibling(&doc.forest, *anchor, *side, &mut doc.ids);
                Self::commit_edit(doc, edit)
            }

            Mutation::InsertChild { parent } => {
                let edit = structure::insert_child(&doc.forest, *parent, &mut doc.ids);
                Self::commit_edit(doc, edit)
            }

            Mutation::WrapWithParent { target } => {
                let edit = structure::wrap_with_new_parent(&doc.forest, *target, &mut doc.ids);
                Self::commit_edit(doc, edit)
            }

            Mutation::RemoveElement { target } => {
                doc.forest = structure::remove(&doc.forest, *target);
                doc.selected_index = 0;
                None
            }

            Mutation::ToggleExpanded { target } => {
                let selected = doc.selected().map(|el| el.id);
                doc.forest = structure::toggle_expanded(&doc.forest, *target);
                if let Some(index) = selected
                    .and_then(|id| index_of(&doc.forest, id))
                    .or_else(|| index_of(&doc.forest, *target))
                {
                    doc.selected_index = index;
                }
                None
            }

            Mutation::SelectElement { target } => {
                if let Some(index) = index_of(&doc.forest, *target) {
                    doc.selected_index = index;
                }
                None
            }

            Mutation::SelectIndex { index } => {
                doc.selected_index = *index;
                None
            }

            Mutation::SetBlockName { name } => {
                doc.block_name = name.clone();
                None
            }

            Mutation::SetText { target, text } => {
                doc.forest = properties::set_text(&doc.forest, *target, text);
                None
            }

            Mutation::SetElementName { target, name } => {
                doc.forest = properties::set_element_name(&doc.forest, *target, name);
                None
            }

            Mutation::SetModifiers { target, modifiers } => {
                doc.forest = properties::set_modifiers(&doc.forest, *target, modifiers);
                None
            }

            Mutation::SetProperty {
                target,
                key,
                value,
                cascade,
            } => {
                doc.forest = properties::set_property(&doc.forest, *target, key, value, *cascade);
                None
            }

            Mutation::SetPropertyEnabled {
                target,
                key,
                enabled,
                cascade,
            } => {
                doc.forest = properties::set_property_enabled(&doc.forest, *target, key, *enabled, *cascade);
                None
            }

            Mutation::SetHideElementName { target, hide } => {
                doc.forest = properties::set_hide_element_name(&doc.forest, *target, *hide);
                None
            }

            Mutation::SetHideModifiers { target, hide } => {
                doc.forest = properties::set_hide_modifiers(&doc.forest, *target, *hide);
                None
            }

            Mutation::SetHideHtmlTag { target, hide } => {
                doc.forest = properties::set_hide_html_tag(&doc.forest, *target, *hide);
                None
            }

            Mutation::SetUseParentBlock { target, enabled } => {
                doc.forest = properties::set_use_parent_block(&doc.forest, *target, *enabled);
                None
            }

            Mutation::SetHtmlTagName { target, tag } => {
                doc.forest = properties::set_html_tag_name(&doc.forest, *target, tag);
                None
            }

            Mutation::SetElementBlockName { target, name } => {
                doc.forest = properties::set_block_name(&doc.forest, *target, name);
                None
            }

            Mutation::SetHtmlAttribute { target, name, value } => {
                doc.forest = properties::set_html_attribute(&doc.forest, *target, name, value);
                None
            }

            Mutation::RenameHtmlAttribute {
                target,
                old_name,
                new_name,
            } => {
                doc.forest = properties::rename_html_attribute(&doc.forest, *target, old_name, new_name);
                None
            }

            Mutation::DeleteHtmlAttribute { target, name } => {
                doc.forest = properties::delete_html_attribute(&doc.forest, *target, name);
                None
            }
        }
    }

    /// Install a structural edit and select what it created.
    fn commit_edit(doc: &mut Document, edit: Edit) -> Option<ElementId> {
        doc.forest = edit.forest;
        if let Some(index) = edit.created.and_then(|id| index_of(&doc.forest, id)) {
            doc.selected_index = index;
        }
        edit.created
    }
}

/// Clamp a selection into the visible range of `doc`.
pub(crate) fn clamp_selection(doc: &mut Document) {
    let visible = count_visible(&doc.forest);
    doc.selected_index = doc.selected_index.min(visible.saturating_sub(1));
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Element created by an insert or wrap
    pub created: Option<ElementId>,

    /// Visible index selected afterwards
    pub selected_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_batch() {
        let json = r#"[
            { "type": "insertSibling", "anchor": 1, "side": "after" },
            { "type": "setProperty", "target": 2, "key": "backgroundColor", "value": "red" },
            { "type": "setPropertyEnabled", "target": 2, "key": "max-width", "enabled": false, "cascade": false },
            { "type": "renameHtmlAttribute", "target": 2, "oldName": "id", "newName": "data-id" }
        ]"#;
        let batch: Vec<Mutation> = serde_json::from_str(json).unwrap();

        assert_eq!(
            batch[0],
            Mutation::InsertSibling {
                anchor: Some(ElementId(1)),
                side: Side::After
            }
        );
        assert_eq!(
            batch[1],
            Mutation::SetProperty {
                target: ElementId(2),
                key: StyleProperty::BackgroundColor,
                value: "red".to_string(),
                cascade: true,
            }
        );
        assert!(matches!(
            &batch[2],
            Mutation::SetPropertyEnabled { key: StyleProperty::MaxWidth, cascade: false, .. }
        ));
        assert_eq!(batch[3].name(), "renameHtmlAttribute");
    }

    #[test]
    fn test_sibling_without_anchor_defaults() {
        let m: Mutation = serde_json::from_str(r#"{ "type": "insertSibling", "side": "before" }"#).unwrap();
        assert_eq!(m.target(), None);
    }

    #[test]
    fn test_serialized_name_matches_tag() {
        let m = Mutation::SetUseParentBlock {
            target: ElementId(3),
            enabled: true,
        };
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["type"], m.name());
        assert_eq!(m.target(), Some(ElementId(3)));
        assert!(!m.is_selection_only());
    }
}
