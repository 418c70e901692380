//! # Property edits
//!
//! Point updates to a single element's style, naming and HTML settings.
//! Style values and their enabled state can optionally cascade to every
//! descendant of the target; nothing here ever touches ancestors or
//! siblings.

use crate::template::DEFAULT_TAG;
use bemforge_model::{walk_element_mut, Element, ElementId, Forest, StyleProperty, VisitorMut};

/// Run `edit` on the element with `id`. Unknown ids return the input.
fn update(forest: &Forest, id: ElementId, edit: impl FnOnce(&mut Element)) -> Forest {
    let mut next = forest.clone();
    match next.find_mut(id) {
        Some(element) => {
            edit(element);
            next
        }
        None => forest.clone(),
    }
}

/// Applies a closure to every descendant it visits.
struct ForEachDescendant<F: FnMut(&mut Element)>(F);

impl<F: FnMut(&mut Element)> VisitorMut for ForEachDescendant<F> {
    fn visit_element_mut(&mut self, element: &mut Element) {
        (self.0)(element);
        walk_element_mut(self, element);
    }
}

/// Run `edit` on `id` and, when `cascade` is set, on all of its descendants.
fn update_subtree(forest: &Forest, id: ElementId, cascade: bool, mut edit: impl FnMut(&mut Element)) -> Forest {
    update(forest, id, |element| {
        edit(element);
        if cascade {
            walk_element_mut(&mut ForEachDescendant(&mut edit), element);
        }
    })
}

pub fn set_property(forest: &Forest, id: ElementId, key: &StyleProperty, value: &str, cascade: bool) -> Forest {
    update_subtree(forest, id, cascade, |element| {
        element.properties.insert(key.clone(), value.to_string());
    })
}

/// Include or exclude `key` from generated CSS. The stored value is kept.
pub fn set_property_enabled(
    forest: &Forest,
    id: ElementId,
    key: &StyleProperty,
    enabled: bool,
    cascade: bool,
) -> Forest {
    update_subtree(forest, id, cascade, |element| {
        if enabled {
            element.disabled_properties.remove(key);
        } else {
            element.disabled_properties.insert(key.clone());
        }
    })
}

pub fn set_text(forest: &Forest, id: ElementId, text: &str) -> Forest {
    update(forest, id, |element| element.text = text.to_string())
}

pub fn set_element_name(forest: &Forest, id: ElementId, name: &str) -> Forest {
    update(forest, id, |element| element.element_name = name.to_string())
}

/// Split a comma separated modifier list, dropping blanks.
pub fn parse_modifiers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

pub fn set_modifiers(forest: &Forest, id: ElementId, modifiers: &str) -> Forest {
    let modifiers = parse_modifiers(modifiers);
    update(forest, id, |element| element.modifiers = modifiers)
}

pub fn set_hide_element_name(forest: &Forest, id: ElementId, hide: bool) -> Forest {
    update(forest, id, |element| element.hide_element_name = hide)
}

pub fn set_hide_modifiers(forest: &Forest, id: ElementId, hide: bool) -> Forest {
    update(forest, id, |element| element.hide_modifiers = hide)
}

pub fn set_hide_html_tag(forest: &Forest, id: ElementId, hide: bool) -> Forest {
    update(forest, id, |element| element.hide_html_tag = hide)
}

pub fn set_use_parent_block(forest: &Forest, id: ElementId, use_parent: bool) -> Forest {
    update(forest, id, |element| element.use_parent_block = use_parent)
}

/// A blank tag resets to `div`.
pub fn set_html_tag_name(forest: &Forest, id: ElementId, tag: &str) -> Forest {
    let tag = match tag.trim() {
        "" => DEFAULT_TAG,
        tag => tag,
    };
    update(forest, id, |element| element.html_tag_name = Some(tag.to_string()))
}

/// Node-local block override. A blank name clears it.
pub fn set_block_name(forest: &Forest, id: ElementId, block: &str) -> Forest {
    let block = block.trim();
    update(forest, id, |element| {
        element.block_name = (!block.is_empty()).then(|| block.to_string());
    })
}

pub fn set_html_attribute(forest: &Forest, id: ElementId, name: &str, value: &str) -> Forest {
    let name = name.trim();
    if name.is_empty() {
        return forest.clone();
    }
    update(forest, id, |element| {
        element.html_attributes.insert(name.to_string(), value.to_string());
    })
}

/// Rename in place. A blank new name deletes the attribute.
pub fn rename_html_attribute(forest: &Forest, id: ElementId, old_name: &str, new_name: &str) -> Forest {
    let new_name = new_name.trim();
    update(forest, id, |element| {
        if new_name.is_empty() {
            element.html_attributes.remove(old_name);
        } else {
            element.html_attributes.rename(old_name, new_name.to_string());
        }
    })
}

pub fn delete_html_attribute(forest: &Forest, id: ElementId, name: &str) -> Forest {
    update(forest, id, |element| {
        element.html_attributes.remove(name);
    })
}
