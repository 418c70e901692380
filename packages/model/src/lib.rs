//! # bemforge model
//!
//! The element tree edited by bemforge and the naming rules that turn it
//! into BEM class names.
//!
//! ```text
//! Forest ─┬─ Element (block__element--modifier, styles, attributes)
//!         │    └─ children: Arc<Element> ...
//!         └─ Element ...
//! ```
//!
//! Forests are persistent values: cloning is cheap and mutation copies only
//! the path to the edited node.

mod class_name;
mod document;
mod element;
mod forest;
mod id_generator;
mod ordered_map;
mod style;
mod visitor;

pub use class_name::{base_class_name, effective_block_name, resolve_class_name};
pub use document::{check_ids, SnapshotError, StyleDocument};
pub use element::{Element, ElementId};
pub use forest::{ElementIndex, Forest};
pub use id_generator::IdGenerator;
pub use ordered_map::{AttributeMap, OrderedMap, StyleMap};
pub use style::{to_kebab_case, PropertyCategory, StyleProperty};
pub use visitor::{walk_element, walk_element_mut, walk_forest, TreeStats, Visitor, VisitorMut};
