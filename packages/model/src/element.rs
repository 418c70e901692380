//! The element node: the single entity of the editing model.

use crate::ordered_map::{AttributeMap, StyleMap};
use crate::style::StyleProperty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Forest-wide unique element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        ElementId(id)
    }
}

/// A styleable node in the component tree.
///
/// Children are reference counted so that editing a forest only copies the
/// spine from the root down to the touched node; untouched subtrees stay
/// shared with the previous version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,

    #[serde(default)]
    pub text: String,

    /// BEM element segment. Empty means none.
    #[serde(default)]
    pub element_name: String,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub hide_element_name: bool,

    #[serde(default)]
    pub hide_modifiers: bool,

    /// Node-local override of the BEM block name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,

    /// Take the block name from the nearest ancestor instead.
    #[serde(default)]
    pub use_parent_block: bool,

    #[serde(default)]
    pub properties: StyleMap,

    /// Properties kept in `properties` but left out of generated CSS.
    #[serde(default)]
    pub disabled_properties: BTreeSet<StyleProperty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_tag_name: Option<String>,

    #[serde(default)]
    pub html_attributes: AttributeMap,

    /// Fall back to a plain container tag and drop custom attributes.
    #[serde(default)]
    pub hide_html_tag: bool,

    #[serde(default)]
    pub children: Vec<Arc<Element>>,

    #[serde(default)]
    pub parent_id: Option<ElementId>,

    #[serde(default = "default_expanded")]
    pub expanded: bool,
}

fn default_expanded() -> bool {
    true
}

impl Element {
    pub fn new(id: ElementId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            element_name: String::new(),
            modifiers: Vec::new(),
            hide_element_name: false,
            hide_modifiers: false,
            block_name: None,
            use_parent_block: false,
            properties: StyleMap::new(),
            disabled_properties: BTreeSet::new(),
            html_tag_name: None,
            html_attributes: AttributeMap::new(),
            hide_html_tag: false,
            children: Vec::new(),
            parent_id: None,
            expanded: true,
        }
    }

    pub fn with_element_name(mut self, name: impl Into<String>) -> Self {
        self.element_name = name.into();
        self
    }

    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_block_name(mut self, block: impl Into<String>) -> Self {
        self.block_name = Some(block.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<StyleProperty>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.html_tag_name = Some(tag.into());
        self
    }

    /// Append a child, fixing up its `parent_id`.
    pub fn with_child(mut self, mut child: Element) -> Self {
        child.parent_id = Some(self.id);
        self.children.push(Arc::new(child));
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.expanded = false;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether `id` is this node or one of its descendants.
    pub fn contains(&self, id: ElementId) -> bool {
        self.id == id || self.children.iter().any(|c| c.contains(id))
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_size()).sum::<usize>()
    }

    pub fn is_property_enabled(&self, property: &StyleProperty) -> bool {
        !self.disabled_properties.contains(property)
    }

    /// Enabled declarations, in insertion order.
    pub fn enabled_properties(&self) -> impl Iterator<Item = (&StyleProperty, &String)> {
        self.properties
            .iter()
            .filter(|(k, _)| !self.disabled_properties.contains(*k))
    }

    /// Tag used when rendering, honoring `hide_html_tag`.
    pub fn effective_tag<'a>(&'a self, fallback: &'a str) -> &'a str {
        match &self.html_tag_name {
            Some(tag) if !self.hide_html_tag && !tag.trim().is_empty() => tag,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_child_sets_parent() {
        let root = Element::new(ElementId(1), "root").with_child(Element::new(ElementId(2), "child"));
        assert_eq!(root.children[0].parent_id, Some(ElementId(1)));
        assert!(root.contains(ElementId(2)));
        assert_eq!(root.subtree_size(), 2);
    }

    #[test]
    fn test_enabled_properties_skip_disabled() {
        let mut el = Element::new(ElementId(1), "x")
            .with_property("color", "red")
            .with_property("fontSize", "12px");
        el.disabled_properties.insert(StyleProperty::Color);

        let enabled: Vec<_> = el.enabled_properties().map(|(k, _)| k.clone()).collect();
        assert_eq!(enabled, vec![StyleProperty::FontSize]);
        assert_eq!(el.properties.len(), 2);
    }

    #[test]
    fn test_effective_tag() {
        let mut el = Element::new(ElementId(1), "x").with_tag("button");
        assert_eq!(el.effective_tag("div"), "button");
        el.hide_html_tag = true;
        assert_eq!(el.effective_tag("div"), "div");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"id": 7, "text": "Hi", "elementName": "", "modifiers": [],
            "properties": {"color": "red"}, "children": [], "parentId": null, "expanded": true}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.id, ElementId(7));
        assert!(el.disabled_properties.is_empty());
        assert!(el.html_attributes.is_empty());
        assert!(!el.use_parent_block);
        assert_eq!(el.properties.get(&StyleProperty::Color).map(String::as_str), Some("red"));
    }
}
