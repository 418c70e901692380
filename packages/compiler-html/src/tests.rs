use crate::{compile_to_html, compile_to_html_with, CompileOptions};
use bemforge_model::{Element, ElementId, Forest};

fn el(id: u64, text: &str) -> Element {
    Element::new(ElementId(id), text)
}

#[test]
fn test_compile_single_root() {
    let forest = Forest::from_roots([el(1, "Hi").with_property("color", "red")]);
    assert_eq!(compile_to_html(&forest, "btn"), r#"<div class="btn">Hi</div>"#);
}

#[test]
fn test_compile_nested_indentation() {
    let forest = Forest::from_roots([el(1, "Card")
        .with_element_name("main")
        .with_child(el(2, "Title").with_element_name("title").with_tag("h2"))
        .with_child(el(3, "Body").with_child(el(4, "Deep")))]);

    let expected = [
        r#"<div class="card__main">Card"#,
        r#"  <h2 class="card__title">Title</h2>"#,
        r#"  <div class="card">Body"#,
        r#"    <div class="card">Deep</div>"#,
        r#"  </div>"#,
        r#"</div>"#,
    ]
    .join("\n");

    assert_eq!(compile_to_html(&forest, "card"), expected);
}

#[test]
fn test_roots_are_newline_joined() {
    let forest = Forest::from_roots([el(1, "a"), el(2, "b")]);
    let html = compile_to_html(&forest, "x");
    assert_eq!(html, "<div class=\"x\">a</div>\n<div class=\"x\">b</div>");
    assert!(!html.ends_with('\n'));
}

#[test]
fn test_compile_with_attributes() {
    let mut root = el(1, "Submit").with_tag("button");
    root.html_attributes.insert("type".to_string(), "button".to_string());
    root.html_attributes.insert("class".to_string(), "ignored".to_string());
    root.html_attributes.insert(" ".to_string(), "blank".to_string());
    root.html_attributes.insert("disabled".to_string(), String::new());
    let forest = Forest::from_roots([root]);

    assert_eq!(
        compile_to_html(&forest, "btn"),
        r#"<button class="btn" type="button" disabled="">Submit</button>"#
    );
}

#[test]
fn test_hidden_tag_drops_tag_and_attributes() {
    let mut root = el(1, "x").with_tag("a");
    root.html_attributes.insert("href".to_string(), "/".to_string());
    root.hide_html_tag = true;
    let forest = Forest::from_roots([root]);

    assert_eq!(compile_to_html(&forest, "link"), r#"<div class="link">x</div>"#);
}

#[test]
fn test_modifiers_and_inherited_block() {
    let forest = Forest::from_roots([el(1, "Panel")
        .with_block_name("panel")
        .with_child({
            let mut child = el(2, "Title").with_element_name("title").with_modifiers(["big"]);
            child.use_parent_block = true;
            child
        })]);

    let html = compile_to_html(&forest, "card");
    assert!(html.contains(r#"<div class="panel">Panel"#));
    assert!(html.contains(r#"class="panel__title panel__title--big""#));
}

#[test]
fn test_custom_indent_and_fallback() {
    let forest = Forest::from_roots([el(1, "a").with_child(el(2, "b"))]);
    let options = CompileOptions {
        indent: "\t".to_string(),
        fallback_tag: "section".to_string(),
    };
    assert_eq!(
        compile_to_html_with(&forest, "x", &options),
        "<section class=\"x\">a\n\t<section class=\"x\">b</section>\n</section>"
    );
}

#[test]
fn test_empty_forest() {
    assert_eq!(compile_to_html(&Forest::new(), "x"), "");
}
