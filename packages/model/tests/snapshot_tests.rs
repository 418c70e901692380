//! Loading saved style documents

use bemforge_model::{resolve_class_name, ElementId, StyleDocument, StyleProperty};

const SAVED: &str = r##"{
  "blockName": "card",
  "elements": [
    {
      "id": 1,
      "text": "Card",
      "elementName": "main",
      "modifiers": ["primary"],
      "properties": { "backgroundColor": "#3498db", "max-width": "100%", "zIndex": "2" },
      "disabledProperties": ["max-width"],
      "hideElementName": true,
      "hideModifiers": true,
      "children": [
        {
          "id": 2,
          "text": "Title",
          "elementName": "title",
          "modifiers": ["big", "red"],
          "properties": { "color": "red" },
          "children": [],
          "parentId": 1,
          "expanded": true,
          "htmlTagName": "h2",
          "htmlAttributes": { "id": "heading" },
          "useParentBlock": true
        }
      ],
      "parentId": null,
      "expanded": true,
      "htmlTagName": "div",
      "htmlAttributes": {},
      "hideHtmlTag": false,
      "blockName": "panel"
    }
  ]
}"##;

#[test]
fn test_load_saved_document() {
    let doc = StyleDocument::from_json(SAVED).unwrap();
    assert_eq!(doc.block_name, "card");
    assert_eq!(doc.elements.node_count(), 2);

    let root = doc.elements.first_root().unwrap();
    let keys: Vec<_> = root.properties.keys().map(|k| k.key().to_string()).collect();
    assert_eq!(keys, vec!["backgroundColor", "max-width", "zIndex"]);
    assert!(root.disabled_properties.contains(&StyleProperty::MaxWidth));
}

#[test]
fn test_loaded_child_inherits_parent_block() {
    let doc = StyleDocument::from_json(SAVED).unwrap();
    let index = doc.elements.index();
    let title = index.get(ElementId(2)).unwrap();
    assert_eq!(
        resolve_class_name(title, &doc.block_name, Some(&index)),
        "panel__title panel__title--big panel__title--red"
    );
}

#[test]
fn test_save_then_load_is_stable() {
    let doc = StyleDocument::from_json(SAVED).unwrap();
    let json = doc.to_json_pretty().unwrap();
    let reloaded = StyleDocument::from_json(&json).unwrap();
    assert_eq!(doc, reloaded);
}
