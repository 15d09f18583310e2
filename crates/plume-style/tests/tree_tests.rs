//! Integration tests for the normalized style tree.

use plume_style::{StylePath, StyleTree, StyleValue};
use serde_json::json;

fn path(dotted: &str) -> StylePath {
    StylePath::dotted(dotted)
}

fn scalar(value: &str) -> StyleValue {
    StyleValue::from(value)
}

#[test]
fn test_default_path_replaces_first_hyphen() {
    assert_eq!(StylePath::from_property("margin-top"), path("margin.top"));
    assert_eq!(
        StylePath::from_property("border-top-color").segments(),
        ["border", "top-color"]
    );
    assert_eq!(StylePath::from_property("color"), path("color"));
}

#[test]
fn test_path_display_and_prefix() {
    assert_eq!(path("border.color.top").to_string(), "border.color.top");
    assert!(path("border.color").is_prefix_of(&path("border.color.top")));
    assert!(path("border").is_prefix_of(&path("border")));
    assert!(!path("border.width").is_prefix_of(&path("border.color.top")));
    assert_eq!(path("border").child("style"), path("border.style"));
}

#[test]
fn test_set_and_get_path() {
    let mut tree = StyleTree::new();
    tree.set_path(&path("border.color.top"), scalar("red"));
    assert_eq!(tree.get_path(&path("border.color.top")), Some(&scalar("red")));
    assert_eq!(tree.get_path(&path("border.color.left")), None);
    assert_eq!(tree.get_path(&path("border.color.top.deeper")), None);
    assert!(tree.get_path(&path("border.color")).is_some_and(StyleValue::is_map));
}

#[test]
fn test_merge_path_keeps_siblings() {
    let mut tree = StyleTree::new();
    tree.set_path(&path("border.color.top"), scalar("red"));

    let left: StyleTree = [("left", "blue")].into_iter().collect();
    let incoming: StyleTree = [("color", StyleValue::Map(left))].into_iter().collect();
    tree.merge_path(&path("border"), StyleValue::Map(incoming));

    assert_eq!(tree.get_path(&path("border.color.top")), Some(&scalar("red")));
    assert_eq!(tree.get_path(&path("border.color.left")), Some(&scalar("blue")));
}

#[test]
fn test_merge_path_replaces_leaves() {
    let mut tree = StyleTree::new();
    tree.set_path(&path("margin.top"), scalar("1px"));
    tree.merge_path(&path("margin.top"), scalar("2px"));
    assert_eq!(tree.get_path(&path("margin.top")), Some(&scalar("2px")));

    tree.merge_path(&path("margin"), scalar("auto"));
    assert_eq!(tree.get("margin"), Some(&scalar("auto")));
}

#[test]
fn test_empty_map_writes_nothing() {
    let mut tree = StyleTree::new();
    tree.merge_path(&path("margin"), StyleValue::Map(StyleTree::new()));
    assert!(tree.is_empty());
}

#[test]
fn test_merge_does_not_alias_incoming() {
    let mut incoming: StyleTree = [("top", "1px")].into_iter().collect();
    let mut tree = StyleTree::new();
    tree.merge_path(&path("margin"), StyleValue::Map(incoming.clone()));

    incoming.insert("top", "9px");
    assert_eq!(tree.get_path(&path("margin.top")), Some(&scalar("1px")));
}

#[test]
fn test_remove_path_prunes_empty_branches() {
    let mut tree = StyleTree::new();
    tree.set_path(&path("border.color.top"), scalar("red"));
    tree.set_path(&path("border.style.top"), scalar("solid"));

    assert_eq!(tree.remove_path(&path("border.color.top")), Some(scalar("red")));
    assert_eq!(tree.get_path(&path("border.color")), None);
    assert_eq!(tree.get_path(&path("border.style.top")), Some(&scalar("solid")));

    assert_eq!(tree.remove_path(&path("border.style.top")), Some(scalar("solid")));
    assert!(tree.is_empty());
}

#[test]
fn test_remove_missing_path() {
    let mut tree = StyleTree::new();
    tree.insert("color", "red");
    assert_eq!(tree.remove_path(&path("color.top")), None);
    assert_eq!(tree.remove_path(&path("margin.top")), None);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_inline_string_of_leaves() {
    assert_eq!(scalar("1px").to_inline_string().as_deref(), Some("1px"));
    let list = StyleValue::from(vec!["left".to_owned(), "top".to_owned()]);
    assert_eq!(list.to_inline_string().as_deref(), Some("left top"));
    assert_eq!(StyleValue::Map(StyleTree::new()).to_inline_string(), None);
}

#[test]
fn test_serializes_as_plain_json() {
    let mut tree = StyleTree::new();
    tree.set_path(&path("margin.top"), scalar("1px"));
    tree.set_path(
        &path("background.position"),
        StyleValue::from(vec!["left".to_owned(), "top".to_owned()]),
    );
    tree.insert("foo-bar", "baz");

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "background": { "position": ["left", "top"] },
            "foo-bar": "baz",
            "margin": { "top": "1px" }
        })
    );
}
