//! Starting values for newly created elements.
//!
//! New nodes copy the *current* style of the first root, so customizing the
//! top-level element changes what later insertions look like. The constants
//! here only apply when there is no root to copy from.

use crate::selection::count_visible;
use bemforge_model::{Element, ElementId, Forest, StyleMap, StyleProperty};
use std::collections::BTreeSet;

pub const NEW_ELEMENT_TEXT: &str = "New element";
pub const NEW_PARENT_TEXT: &str = "Parent element";
pub const MAIN_ELEMENT_TEXT: &str = "Main element";
pub const DEFAULT_TAG: &str = "div";

/// Style of a new element when the forest has no root to copy.
pub fn fallback_properties() -> StyleMap {
    use StyleProperty::*;
    [
        (Width, "auto"),
        (Height, "auto"),
        (BackgroundColor, "#e74c3c"),
        (Color, "#ffffff"),
        (FontSize, "16px"),
        (Padding, "10px"),
        (BorderRadius, "4px"),
        (MarginTop, "10px"),
        (MarginBottom, "10px"),
        (Display, "flex"),
        (JustifyContent, "center"),
        (AlignItems, "center"),
        (FontFamily, "Arial, sans-serif"),
        (Position, "relative"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

/// Block-level presentation layered over the template for wrap parents.
fn parent_overrides() -> [(StyleProperty, &'static str); 3] {
    [
        (StyleProperty::BackgroundColor, "#f5f5f5"),
        (StyleProperty::Padding, "20px"),
        (StyleProperty::Display, "block"),
    ]
}

fn template_style(forest: &Forest) -> (StyleMap, BTreeSet<StyleProperty>) {
    match forest.first_root() {
        Some(root) => (root.properties.clone(), root.disabled_properties.clone()),
        None => (fallback_properties(), BTreeSet::new()),
    }
}

/// A fresh element styled after the first root.
pub fn new_element(forest: &Forest, id: ElementId, parent_id: Option<ElementId>) -> Element {
    let (properties, disabled_properties) = template_style(forest);
    let mut element = Element::new(id, NEW_ELEMENT_TEXT)
        .with_element_name(format!("element-{}", count_visible(forest) + 1))
        .with_modifiers(["secondary"])
        .with_tag(DEFAULT_TAG);
    element.properties = properties;
    element.disabled_properties = disabled_properties;
    element.parent_id = parent_id;
    element
}

/// A fresh wrapper element. Children are attached by the caller.
pub fn new_parent(forest: &Forest, id: ElementId, parent_id: Option<ElementId>) -> Element {
    let (mut properties, disabled_properties) = template_style(forest);
    for (key, value) in parent_overrides() {
        properties.insert(key, value.to_string());
    }
    let mut element = Element::new(id, NEW_PARENT_TEXT)
        .with_element_name(format!("parent-{}", count_visible(forest) + 1))
        .with_tag(DEFAULT_TAG);
    element.properties = properties;
    element.disabled_properties = disabled_properties;
    element.parent_id = parent_id;
    element
}

/// The element a new document starts with. Every property is present but
/// disabled, so the first render is unstyled until the user opts in.
pub fn main_element(id: ElementId) -> Element {
    use StyleProperty::*;
    let properties: StyleMap = [
        (Width, "auto"),
        (Height, "auto"),
        (MaxWidth, "100%"),
        (MaxHeight, "100%"),
        (BackgroundColor, "#3498db"),
        (Color, "#ffffff"),
        (FontSize, "16px"),
        (Padding, "20px"),
        (PaddingInlineStart, "20px"),
        (PaddingInlineEnd, "20px"),
        (PaddingBlockStart, "20px"),
        (PaddingBlockEnd, "20px"),
        (BorderRadius, "8px"),
        (Border, "1px solid #2980b9"),
        (BorderWidth, "1px"),
        (BorderStyle, "solid"),
        (BoxShadow, "0 4px 8px rgba(0,0,0,0.2)"),
        (Display, "block"),
        (Position, "relative"),
        (Overflow, "hidden"),
        (Opacity, "1"),
        (Transform, "scale(1)"),
        (FlexDirection, "row"),
        (JustifyContent, "center"),
        (AlignItems, "center"),
        (FontFamily, "Arial, sans-serif"),
        (Transition, "all 0.3s ease"),
        (MarginTop, "10px"),
        (MarginBottom, "10px"),
        (MarginLeft, "10px"),
        (MarginRight, "10px"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();

    let mut element = Element::new(id, MAIN_ELEMENT_TEXT)
        .with_element_name("main")
        .with_modifiers(["primary"])
        .with_tag(DEFAULT_TAG);
    element.properties = properties;
    element.disabled_properties = StyleProperty::KNOWN.iter().cloned().collect();
    element.hide_element_name = true;
    element.hide_modifiers = true;
    element
}
