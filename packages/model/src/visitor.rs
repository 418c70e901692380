use crate::element::Element;
use crate::forest::Forest;
use std::sync::Arc;

/// Visitor pattern for traversing element trees immutably
///
/// The default implementations walk the entire forest in pre-order,
/// ignoring `expanded`. Override `visit_element` and call `walk_element`
/// to keep descending.
pub trait Visitor: Sized {
    fn visit_forest(&mut self, forest: &Forest) {
        walk_forest(self, forest);
    }

    fn visit_element(&mut self, element: &Element) {
        walk_element(self, element);
    }
}

/// Mutable visitor for rewriting element trees in place
///
/// Children are unshared with [`Arc::make_mut`] as the walk reaches them, so
/// only visited subtrees are copied.
pub trait VisitorMut: Sized {
    fn visit_element_mut(&mut self, element: &mut Element) {
        walk_element_mut(self, element);
    }
}

pub fn walk_forest<V: Visitor>(visitor: &mut V, forest: &Forest) {
    for root in forest.roots() {
        visitor.visit_element(root);
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    for child in &element.children {
        visitor.visit_element(child);
    }
}

pub fn walk_element_mut<V: VisitorMut>(visitor: &mut V, element: &mut Element) {
    for child in &mut element.children {
        visitor.visit_element_mut(Arc::make_mut(child));
    }
}

/// Node counts for a forest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub max_depth: usize,
    pub collapsed: usize,
}

impl TreeStats {
    pub fn collect(forest: &Forest) -> Self {
        let mut collector = StatsCollector::default();
        collector.visit_forest(forest);
        collector.stats
    }
}

#[derive(Default)]
struct StatsCollector {
    stats: TreeStats,
    depth: usize,
}

impl Visitor for StatsCollector {
    fn visit_element(&mut self, element: &Element) {
        self.depth += 1;
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        if !element.expanded && element.has_children() {
            self.stats.collapsed += 1;
        }
        walk_element(self, element);
        self.depth -= 1;
    }
}
