//! BEM class-name resolution.
//!
//! A node's class is `block[__element]` followed by one
//! `block[__element]--modifier` token per modifier. The block comes from, in
//! order: the nearest ancestor's block (when `use_parent_block` is set), the
//! node's own `block_name`, or the document default.

use crate::element::Element;
use crate::forest::ElementIndex;

/// Block name that applies to `element`.
///
/// Ancestor inheritance needs `index`; without it a node that uses its
/// parent's block falls back to its own block name or the default.
pub fn effective_block_name<'a>(
    element: &'a Element,
    default_block: &'a str,
    index: Option<&ElementIndex<'a>>,
) -> &'a str {
    if element.use_parent_block && element.parent_id.is_some() {
        if let Some(index) = index {
            return inherited_block_name(element, default_block, index);
        }
    }
    match element.block_name.as_deref() {
        Some(block) if !block.is_empty() => block,
        _ => default_block,
    }
}

fn inherited_block_name<'a>(
    element: &'a Element,
    default_block: &'a str,
    index: &ElementIndex<'a>,
) -> &'a str {
    let mut current = index.parent_of(element);
    // A forest has no cycles, but a hand-edited document might.
    let mut remaining = index.len();
    while let Some(ancestor) = current {
        if remaining == 0 {
            break;
        }
        remaining -= 1;
        if !ancestor.use_parent_block {
            if let Some(block) = ancestor.block_name.as_deref().filter(|b| !b.is_empty()) {
                return block;
            }
        }
        current = index.parent_of(ancestor);
    }
    default_block
}

/// `block[__element]`, without modifier tokens.
pub fn base_class_name(element: &Element, default_block: &str, index: Option<&ElementIndex<'_>>) -> String {
    let block = effective_block_name(element, default_block, index);
    if !element.element_name.is_empty() && !element.hide_element_name {
        format!("{}__{}", block, element.element_name)
    } else {
        block.to_string()
    }
}

/// Full class attribute value: base class followed by one token per
/// visible modifier, space separated.
pub fn resolve_class_name(element: &Element, default_block: &str, index: Option<&ElementIndex<'_>>) -> String {
    let base = base_class_name(element, default_block, index);
    if element.modifiers.is_empty() || element.hide_modifiers {
        return base;
    }

    let mut class = base.clone();
    for modifier in &element.modifiers {
        class.push(' ');
        class.push_str(&base);
        class.push_str("--");
        class.push_str(modifier);
    }
    class
}
