//! # Structural edits
//!
//! Insert, wrap and remove operations over a [`Forest`]. Each takes the
//! current forest by reference and returns a new one; nodes off the edited
//! path stay shared with the input.
//!
//! Unknown ids are not errors. The forest comes back unchanged and
//! [`Edit::created`] is `None`.

use crate::template;
use bemforge_model::{ElementId, Forest, IdGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where a sibling goes relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Before,
    After,
}

/// Outcome of a structural edit.
#[derive(Debug, Clone)]
pub struct Edit {
    pub forest: Forest,

    /// Id of the node the edit created, if it created one.
    pub created: Option<ElementId>,
}

impl Edit {
    fn unchanged(forest: &Forest) -> Self {
        Self {
            forest: forest.clone(),
            created: None,
        }
    }
}

/// Insert a new element next to `anchor`.
///
/// Without an anchor the element goes to the start (`Before`) or end
/// (`After`) of the top level.
pub fn insert_sibling(forest: &Forest, anchor: Option<ElementId>, side: Side, ids: &mut IdGenerator) -> Edit {
    let Some(anchor) = anchor else {
        let element = Arc::new(template::new_element(forest, ids.new_id(), None));
        let created = Some(element.id);
        let mut next = forest.clone();
        match side {
            Side::Before => next.roots_mut().insert(0, element),
            Side::After => next.roots_mut().push(element),
        }
        return Edit { forest: next, created };
    };

    let Some(anchor_node) = forest.find(anchor) else {
        return Edit::unchanged(forest);
    };
    let element = template::new_element(forest, ids.new_id(), anchor_node.parent_id);
    let created = Some(element.id);

    let mut next = forest.clone();
    let Some((siblings, pos)) = next.locate_mut(anchor) else {
        return Edit::unchanged(forest);
    };
    let at = match side {
        Side::Before => pos,
        Side::After => pos + 1,
    };
    siblings.insert(at, Arc::new(element));
    Edit { forest: next, created }
}

/// Append a new element to `parent`'s children and expand `parent`.
pub fn insert_child(forest: &Forest, parent: ElementId, ids: &mut IdGenerator) -> Edit {
    if !forest.contains(parent) {
        return Edit::unchanged(forest);
    }
    let element = template::new_element(forest, ids.new_id(), Some(parent));
    let created = Some(element.id);

    let mut next = forest.clone();
    if let Some(node) = next.find_mut(parent) {
        node.children.push(Arc::new(element));
        node.expanded = true;
    }
    Edit { forest: next, created }
}

/// Replace `target` with a new element whose only child is `target`.
///
/// The wrapper takes the target's slot and its `parent_id`; a root target
/// gets a root wrapper.
pub fn wrap_with_new_parent(forest: &Forest, target: ElementId, ids: &mut IdGenerator) -> Edit {
    let Some(target_node) = forest.find(target) else {
        return Edit::unchanged(forest);
    };
    let mut wrapper = template::new_parent(forest, ids.new_id(), target_node.parent_id);
    let created = Some(wrapper.id);

    let mut next = forest.clone();
    let Some((siblings, pos)) = next.locate_mut(target) else {
        return Edit::unchanged(forest);
    };
    let mut child = siblings[pos].clone();
    Arc::make_mut(&mut child).parent_id = Some(wrapper.id);
    wrapper.children.push(child);
    siblings[pos] = Arc::new(wrapper);

    Edit { forest: next, created }
}

/// Delete `target` and its subtree.
///
/// The only element of a single-root forest is never removed.
pub fn remove(forest: &Forest, target: ElementId) -> Forest {
    if let [only] = forest.roots() {
        if only.id == target && only.parent_id.is_none() {
            return forest.clone();
        }
    }

    let mut next = forest.clone();
    match next.locate_mut(target) {
        Some((siblings, pos)) => {
            siblings.remove(pos);
            next
        }
        None => forest.clone(),
    }
}

/// Flip `expanded` on `id`.
pub fn toggle_expanded(forest: &Forest, id: ElementId) -> Forest {
    let mut next = forest.clone();
    match next.find_mut(id) {
        Some(node) => {
            node.expanded = !node.expanded;
            next
        }
        None => forest.clone(),
    }
}
