//! # Visible-index selection
//!
//! The tree view addresses the selected element by its position in a
//! pre-order walk that only descends into expanded nodes. A node hidden
//! behind a collapsed ancestor has no index: it has to be revealed before it
//! can be selected.

use bemforge_model::{Element, ElementId, Forest};
use std::sync::Arc;

/// Number of elements reachable through expanded ancestors.
pub fn count_visible(forest: &Forest) -> usize {
    count_visible_in(forest.roots())
}

fn count_visible_in(elements: &[Arc<Element>]) -> usize {
    elements
        .iter()
        .map(|el| 1 + if el.expanded { count_visible_in(&el.children) } else { 0 })
        .sum()
}

/// Element at visible position `index`, clamped into range.
///
/// Returns `None` only for an empty forest.
pub fn resolve(forest: &Forest, index: usize) -> Option<&Element> {
    let total = count_visible(forest);
    if total == 0 {
        return None;
    }
    let target = index.min(total - 1);
    let mut cursor = 0;
    find_by_index(forest.roots(), target, &mut cursor).or_else(|| forest.first_root())
}

fn find_by_index<'a>(elements: &'a [Arc<Element>], target: usize, cursor: &mut usize) -> Option<&'a Element> {
    for el in elements {
        if *cursor == target {
            return Some(el.as_ref());
        }
        *cursor += 1;

        if el.expanded && el.has_children() {
            let visible = count_visible_in(&el.children);
            if target < *cursor + visible {
                return find_by_index(&el.children, target, cursor);
            }
            *cursor += visible;
        }
    }
    None
}

/// Visible position of `id`, or `None` when it is missing or collapsed away.
pub fn index_of(forest: &Forest, id: ElementId) -> Option<usize> {
    let mut cursor = 0;
    index_in(forest.roots(), id, &mut cursor)
}

fn index_in(elements: &[Arc<Element>], id: ElementId, cursor: &mut usize) -> Option<usize> {
    for el in elements {
        if el.id == id {
            return Some(*cursor);
        }
        *cursor += 1;

        if el.expanded {
            if let Some(found) = index_in(&el.children, id, cursor) {
                return Some(found);
            }
        }
    }
    None
}

/// One row of the tree view.
#[derive(Debug, Clone, Copy)]
pub struct VisibleElement<'a> {
    pub index: usize,
    pub depth: usize,
    pub element: &'a Element,
}

/// The visible flattening, in index order.
pub fn visible_elements(forest: &Forest) -> Vec<VisibleElement<'_>> {
    let mut rows = Vec::new();
    collect_visible(forest.roots(), 0, &mut rows);
    rows
}

fn collect_visible<'a>(elements: &'a [Arc<Element>], depth: usize, rows: &mut Vec<VisibleElement<'a>>) {
    for el in elements {
        rows.push(VisibleElement {
            index: rows.len(),
            depth,
            element: el.as_ref(),
        });
        if el.expanded {
            collect_visible(&el.children, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1
    /// ├─ 2
    /// │  └─ 3
    /// └─ 4 (collapsed)
    ///    └─ 5
    /// 6
    fn sample() -> Forest {
        Forest::from_roots([
            Element::new(ElementId(1), "one")
                .with_child(Element::new(ElementId(2), "two").with_child(Element::new(ElementId(3), "three")))
                .with_child(
                    Element::new(ElementId(4), "four")
                        .with_child(Element::new(ElementId(5), "five"))
                        .collapsed(),
                ),
            Element::new(ElementId(6), "six"),
        ])
    }

    #[test]
    fn test_count_skips_collapsed_subtrees() {
        assert_eq!(count_visible(&sample()), 5);
        assert_eq!(count_visible(&Forest::new()), 0);
    }

    #[test]
    fn test_resolve_walks_preorder() {
        let forest = sample();
        let ids: Vec<u64> = (0..5).map(|i| resolve(&forest, i).unwrap().id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_resolve_clamps_out_of_range() {
        let forest = sample();
        assert_eq!(resolve(&forest, 99).unwrap().id, ElementId(6));
        assert!(resolve(&Forest::new(), 0).is_none());
    }

    #[test]
    fn test_index_of_hidden_node_is_none() {
        let forest = sample();
        assert_eq!(index_of(&forest, ElementId(4)), Some(3));
        assert_eq!(index_of(&forest, ElementId(5)), None);
        assert_eq!(index_of(&forest, ElementId(42)), None);
    }

    #[test]
    fn test_round_trip_for_every_visible_node() {
        let forest = sample();
        for row in visible_elements(&forest) {
            let index = index_of(&forest, row.element.id).unwrap();
            assert_eq!(index, row.index);
            assert_eq!(resolve(&forest, index).unwrap().id, row.element.id);
        }
    }

    #[test]
    fn test_visible_rows_carry_depth() {
        let forest = sample();
        let depths: Vec<_> = visible_elements(&forest).iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);
    }
}
