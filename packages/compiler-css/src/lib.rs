//! # bemforge CSS compiler
//!
//! One rule per element, keyed by its base BEM class, followed by an empty
//! rule for each visible modifier as a place to put overrides by hand.
//! Elements are emitted in pre-order regardless of `expanded`.

use bemforge_model::{base_class_name, walk_element, Element, ElementIndex, Forest, Visitor};
use tracing::debug;

const MODIFIER_PLACEHOLDER: &str = "/* modifier-specific styles */";

struct CssCompiler<'a> {
    default_block: &'a str,
    index: ElementIndex<'a>,
    buffer: String,
}

impl Visitor for CssCompiler<'_> {
    fn visit_element(&mut self, element: &Element) {
        let base = base_class_name(element, self.default_block, Some(&self.index));

        let rules: Vec<String> = element
            .enabled_properties()
            .map(|(property, value)| format!("  {}: {};", property.css_name(), value))
            .collect();
        self.buffer.push_str(&format!(".{} {{\n{}\n}}", base, rules.join("\n")));

        if !element.hide_modifiers {
            for modifier in &element.modifiers {
                self.buffer
                    .push_str(&format!("\n\n.{}--{} {{\n  {}\n}}", base, modifier, MODIFIER_PLACEHOLDER));
            }
        }

        self.buffer.push_str("\n\n");
        walk_element(self, element);
    }
}

/// Compile a forest to CSS
pub fn compile_to_css(forest: &Forest, default_block: &str) -> String {
    let mut compiler = CssCompiler {
        default_block,
        index: forest.index(),
        buffer: String::new(),
    };
    compiler.visit_forest(forest);

    debug!(elements = forest.node_count(), bytes = compiler.buffer.len(), "Compiled CSS");
    compiler.buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemforge_model::{ElementId, StyleProperty};

    fn el(id: u64, text: &str) -> Element {
        Element::new(ElementId(id), text)
    }

    #[test]
    fn test_compile_simple_rule() {
        let forest = Forest::from_roots([el(1, "Hi").with_property("color", "red")]);
        assert_eq!(compile_to_css(&forest, "btn"), ".btn {\n  color: red;\n}\n\n");
    }

    #[test]
    fn test_property_names_are_hyphenated() {
        let forest = Forest::from_roots([el(1, "x")
            .with_property("backgroundColor", "#fff")
            .with_property("max-width", "100%")
            .with_property("zIndex", "2")]);
        let css = compile_to_css(&forest, "box");
        assert_eq!(
            css,
            ".box {\n  background-color: #fff;\n  max-width: 100%;\n  z-index: 2;\n}\n\n"
        );
    }

    #[test]
    fn test_disabled_properties_are_excluded() {
        let mut root = el(1, "x").with_property("color", "red").with_property("width", "10px");
        root.disabled_properties.insert(StyleProperty::Width);
        let forest = Forest::from_roots([root]);

        let css = compile_to_css(&forest, "box");
        assert!(css.contains("color: red;"));
        assert!(!css.contains("width"));
    }

    #[test]
    fn test_empty_rule_keeps_blank_line() {
        let forest = Forest::from_roots([el(1, "x")]);
        assert_eq!(compile_to_css(&forest, "box"), ".box {\n\n}\n\n");
    }

    #[test]
    fn test_modifier_placeholders() {
        let forest = Forest::from_roots([el(1, "x")
            .with_element_name("title")
            .with_modifiers(["big", "red"])
            .with_property("color", "red")]);
        let css = compile_to_css(&forest, "card");
        assert_eq!(
            css,
            ".card__title {\n  color: red;\n}\
             \n\n.card__title--big {\n  /* modifier-specific styles */\n}\
             \n\n.card__title--red {\n  /* modifier-specific styles */\n}\n\n"
        );
    }

    #[test]
    fn test_hidden_modifiers_have_no_placeholders() {
        let mut root = el(1, "x").with_modifiers(["big"]);
        root.hide_modifiers = true;
        let forest = Forest::from_roots([root]);
        assert!(!compile_to_css(&forest, "card").contains("--big"));
    }

    #[test]
    fn test_children_follow_parent_even_when_collapsed() {
        let forest = Forest::from_roots([
            el(1, "a")
                .with_element_name("a")
                .with_child(el(2, "b").with_element_name("b"))
                .collapsed(),
            el(3, "c").with_element_name("c"),
        ]);
        let css = compile_to_css(&forest, "x");
        let a = css.find(".x__a").unwrap();
        let b = css.find(".x__b").unwrap();
        let c = css.find(".x__c").unwrap();
        assert!(a < b && b < c);
    }
}
