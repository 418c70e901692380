//! Ordered list of root elements.
//!
//! Cloning a [`Forest`] is cheap: only the root `Arc`s are copied. Mutable
//! lookups go through [`Arc::make_mut`] along the path to the target, so a
//! clone taken before an edit keeps observing the old tree.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Arc<Element>>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from owned roots. Root `parent_id`s are cleared.
    pub fn from_roots(roots: impl IntoIterator<Item = Element>) -> Self {
        Self {
            roots: roots
                .into_iter()
                .map(|mut root| {
                    root.parent_id = None;
                    Arc::new(root)
                })
                .collect(),
        }
    }

    pub fn roots(&self) -> &[Arc<Element>] {
        &self.roots
    }

    /// Mutable access to the root list. Callers are responsible for keeping
    /// `parent_id`s consistent.
    pub fn roots_mut(&mut self) -> &mut Vec<Arc<Element>> {
        &mut self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn first_root(&self) -> Option<&Element> {
        self.roots.first().map(|r| r.as_ref())
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.roots.iter().find_map(|r| r.find(id))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.roots.iter().any(|r| r.contains(id))
    }

    /// Total number of nodes, ignoring `expanded`.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(|r| r.subtree_size()).sum()
    }

    /// Every node in pre-order, ignoring `expanded`.
    pub fn flatten(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for root in &self.roots {
            flatten_into(root, &mut out);
        }
        out
    }

    pub fn max_id(&self) -> Option<ElementId> {
        self.flatten().iter().map(|e| e.id).max()
    }

    /// Id lookup table over the whole forest.
    pub fn index(&self) -> ElementIndex<'_> {
        ElementIndex::new(self)
    }

    /// Mutable access to the node with `id`, copying shared nodes on the way
    /// down.
    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        find_mut_in(&mut self.roots, id)
    }

    /// The sibling list holding `id` and its position within it.
    pub fn locate_mut(&mut self, id: ElementId) -> Option<(&mut Vec<Arc<Element>>, usize)> {
        locate_mut_in(&mut self.roots, id)
    }
}

fn flatten_into<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for child in &element.children {
        flatten_into(child, out);
    }
}

fn find_mut_in(list: &mut [Arc<Element>], id: ElementId) -> Option<&mut Element> {
    let pos = list.iter().position(|c| c.contains(id))?;
    let node = Arc::make_mut(&mut list[pos]);
    if node.id == id {
        return Some(node);
    }
    find_mut_in(&mut node.children, id)
}

fn locate_mut_in(list: &mut Vec<Arc<Element>>, id: ElementId) -> Option<(&mut Vec<Arc<Element>>, usize)> {
    if let Some(pos) = list.iter().position(|c| c.id == id) {
        return Some((list, pos));
    }
    let pos = list.iter().position(|c| c.contains(id))?;
    let node = Arc::make_mut(&mut list[pos]);
    locate_mut_in(&mut node.children, id)
}

/// Id-keyed view of a forest, built once per render so ancestor lookups
/// don't rescan the tree.
#[derive(Debug)]
pub struct ElementIndex<'a> {
    by_id: HashMap<ElementId, &'a Element>,
}

impl<'a> ElementIndex<'a> {
    pub fn new(forest: &'a Forest) -> Self {
        Self {
            by_id: forest.flatten().into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&'a Element> {
        self.by_id.get(&id).copied()
    }

    pub fn parent_of(&self, element: &Element) -> Option<&'a Element> {
        element.parent_id.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        Forest::from_roots([Element::new(ElementId(1), "root")
            .with_child(Element::new(ElementId(2), "a").with_child(Element::new(ElementId(3), "a1")))
            .with_child(Element::new(ElementId(4), "b"))])
    }

    #[test]
    fn test_flatten_is_preorder() {
        let forest = sample();
        let ids: Vec<u64> = forest.flatten().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(forest.node_count(), 4);
        assert_eq!(forest.max_id(), Some(ElementId(4)));
    }

    #[test]
    fn test_find_mut_copies_on_write() {
        let original = sample();
        let mut edited = original.clone();

        edited.find_mut(ElementId(3)).unwrap().text = "changed".to_string();

        assert_eq!(original.find(ElementId(3)).unwrap().text, "a1");
        assert_eq!(edited.find(ElementId(3)).unwrap().text, "changed");
        // The untouched sibling subtree is still shared.
        assert!(Arc::ptr_eq(
            &original.roots()[0].children[1],
            &edited.roots()[0].children[1]
        ));
    }

    #[test]
    fn test_locate_mut_finds_sibling_slot() {
        let mut forest = sample();
        let (siblings, pos) = forest.locate_mut(ElementId(4)).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(siblings.len(), 2);
        assert!(forest.locate_mut(ElementId(99)).is_none());
    }

    #[test]
    fn test_index_parent_lookup() {
        let forest = sample();
        let index = forest.index();
        let leaf = index.get(ElementId(3)).unwrap();
        assert_eq!(index.parent_of(leaf).map(|p| p.id), Some(ElementId(2)));
        assert_eq!(index.len(), 4);
    }
}
