//! Integration tests for the margin, padding, border, and background families.

use std::rc::Rc;

use plume_style::{StyleTree, StyleValue, StylesMap, StylesProcessor};
use serde_json::{Value, json};

/// Helper to build a style map with every built-in family installed
fn styles(raw: &str) -> StylesMap {
    StylesMap::from_style(Rc::new(StylesProcessor::with_default_rules()), raw)
}

fn tree_json(styles: &StylesMap) -> Value {
    serde_json::to_value(styles.normalized()).unwrap()
}

fn inline(styles: &StylesMap, name: &str) -> Option<String> {
    styles.inline_property(name)
}

// Margin and padding

#[test]
fn test_margin_one_value() {
    let styles = styles("margin:1px");
    assert_eq!(
        tree_json(&styles),
        json!({"margin": {"top": "1px", "right": "1px", "bottom": "1px", "left": "1px"}})
    );
    assert_eq!(
        styles.inline_style().as_deref(),
        Some("margin-bottom:1px;margin-left:1px;margin-right:1px;margin-top:1px;")
    );
}

#[test]
fn test_margin_two_values() {
    assert_eq!(
        tree_json(&styles("margin:1px 2px")),
        json!({"margin": {"top": "1px", "right": "2px", "bottom": "1px", "left": "2px"}})
    );
}

#[test]
fn test_margin_three_values() {
    assert_eq!(
        tree_json(&styles("margin:1px 2px 3px")),
        json!({"margin": {"top": "1px", "right": "2px", "bottom": "3px", "left": "2px"}})
    );
}

#[test]
fn test_margin_four_values() {
    assert_eq!(
        tree_json(&styles("margin:1px 2px 3px 4px")),
        json!({"margin": {"top": "1px", "right": "2px", "bottom": "3px", "left": "4px"}})
    );
}

#[test]
fn test_longhand_after_shorthand_overrides_one_side() {
    let styles = styles("margin:2em;margin-top:1px");
    assert_eq!(inline(&styles, "margin-top").as_deref(), Some("1px"));
    assert_eq!(inline(&styles, "margin-left").as_deref(), Some("2em"));
}

#[test]
fn test_shorthand_after_longhand_overrides_every_side() {
    let styles = styles("margin-top:1px;margin:2em");
    assert_eq!(inline(&styles, "margin-top").as_deref(), Some("2em"));
}

#[test]
fn test_margin_shorthand_has_no_inline_value() {
    let styles = styles("margin:1px");
    assert_eq!(inline(&styles, "margin"), None);
    assert!(!styles.has_property("margin"));
    assert!(styles.has_property("margin-top"));

    let sides: StyleTree = [("top", "1px"), ("right", "1px"), ("bottom", "1px"), ("left", "1px")]
        .into_iter()
        .collect();
    assert_eq!(
        styles.normalized_property("margin"),
        Some(StyleValue::Map(sides))
    );
}

#[test]
fn test_margin_keeps_functions_whole() {
    let styles = styles("margin:calc(1px + 2px) auto");
    assert_eq!(inline(&styles, "margin-top").as_deref(), Some("calc(1px + 2px)"));
    assert_eq!(inline(&styles, "margin-right").as_deref(), Some("auto"));
}

#[test]
fn test_padding_matches_margin() {
    let styles = styles("padding:1px 2px;padding-bottom:5px");
    assert_eq!(
        styles.inline_style().as_deref(),
        Some("padding-bottom:5px;padding-left:2px;padding-right:2px;padding-top:1px;")
    );
}

#[test]
fn test_structured_margin_merges() {
    let mut styles = styles("margin:1px");
    let top: StyleTree = [("top", "2px")].into_iter().collect();
    styles.insert_property("margin", top);

    assert_eq!(inline(&styles, "margin-top").as_deref(), Some("2px"));
    assert_eq!(inline(&styles, "margin-bottom").as_deref(), Some("1px"));
}

#[test]
fn test_margin_side_given_as_list_replaces_the_side_leaf() {
    let mut styles = styles("margin:1px");
    styles.insert_property("margin-top", StyleValue::from(vec!["2px".to_owned()]));

    assert_eq!(
        styles.inline_style().as_deref(),
        Some("margin-bottom:1px;margin-left:1px;margin-right:1px;margin-top:2px;")
    );
    assert_eq!(styles.len(), 4);
    assert_eq!(styles.normalized().get("margin-top"), None);
    assert_eq!(
        styles.normalized_property("margin-top"),
        Some(StyleValue::from("2px"))
    );
}

#[test]
fn test_margin_shorthand_given_as_list_expands() {
    let mut styles = styles("");
    styles.insert_property(
        "padding",
        StyleValue::from(vec!["1px".to_owned(), "2px".to_owned()]),
    );
    assert_eq!(
        tree_json(&styles),
        json!({"padding": {"top": "1px", "right": "2px", "bottom": "1px", "left": "2px"}})
    );
}

#[test]
fn test_blank_values_write_nothing() {
    let styles = styles("margin-top:1px;margin-top:;margin:;background-position:;border-left:");
    assert_eq!(styles.inline_style().as_deref(), Some("margin-top:1px;"));
}

// Border

#[test]
fn test_border_side_overrides_shorthand() {
    let styles = styles("border:1px solid blue;border-left:#665511 dashed 2.7em");
    assert_eq!(
        tree_json(&styles),
        json!({"border": {
            "color": {"top": "blue", "right": "blue", "bottom": "blue", "left": "#665511"},
            "style": {"top": "solid", "right": "solid", "bottom": "solid", "left": "dashed"},
            "width": {"top": "1px", "right": "1px", "bottom": "1px", "left": "2.7em"}
        }})
    );
    assert_eq!(inline(&styles, "border-left").as_deref(), Some("2.7em dashed #665511"));
    assert_eq!(inline(&styles, "border-top").as_deref(), Some("1px solid blue"));
    assert_eq!(
        styles.inline_style().as_deref(),
        Some(
            "border-bottom:1px solid blue;border-left:2.7em dashed #665511;\
             border-right:1px solid blue;border-top:1px solid blue;"
        )
    );
}

#[test]
fn test_border_side_normalized_value() {
    let styles = styles("border:1px solid blue;border-left:#665511 dashed 2.7em");
    let left: StyleTree = [("color", "#665511"), ("style", "dashed"), ("width", "2.7em")]
        .into_iter()
        .collect();
    assert_eq!(
        styles.normalized_property("border-left"),
        Some(StyleValue::Map(left))
    );
}

#[test]
fn test_border_color_expands_by_side() {
    let styles = styles("border-color:red green");
    assert_eq!(
        tree_json(&styles),
        json!({"border": {"color": {"top": "red", "right": "green", "bottom": "red", "left": "green"}}})
    );
    assert_eq!(
        styles.inline_style().as_deref(),
        Some("border-bottom:red;border-left:green;border-right:green;border-top:red;")
    );
    assert_eq!(inline(&styles, "border-color"), None);
}

#[test]
fn test_border_side_parts_combine() {
    let styles = styles("border-top-width:thin;border-top-style:solid");
    assert_eq!(styles.inline_style().as_deref(), Some("border-top:thin solid;"));
    assert_eq!(inline(&styles, "border-top-style").as_deref(), Some("solid"));
    assert_eq!(inline(&styles, "border-top-color"), None);
}

#[test]
fn test_border_color_function_stays_one_token() {
    let styles = styles("border:1px solid rgb(1, 2, 3)");
    assert_eq!(
        inline(&styles, "border-right").as_deref(),
        Some("1px solid rgb(1, 2, 3)")
    );
    assert_eq!(inline(&styles, "border"), None);
}

#[test]
fn test_border_remove_side_keeps_others() {
    let mut styles = styles("border:1px solid red");
    styles.remove_property("border-left");

    assert!(!styles.has_property("border-left"));
    assert_eq!(
        styles.style_names(),
        ["border-bottom", "border-right", "border-top"]
    );
}

#[test]
fn test_border_remove_side_part() {
    let mut styles = styles("border:1px solid red");
    styles.remove_property("border-top-color");
    assert_eq!(inline(&styles, "border-top").as_deref(), Some("1px solid"));
    assert_eq!(inline(&styles, "border-bottom").as_deref(), Some("1px solid red"));
}

#[test]
fn test_border_structured_side() {
    let mut styles = styles("");
    let top: StyleTree = [("width", "2px"), ("color", "red")].into_iter().collect();
    styles.insert_property("border-top", top);
    assert_eq!(styles.inline_style().as_deref(), Some("border-top:2px red;"));
}

#[test]
fn test_border_side_part_given_as_list() {
    let mut styles = styles("border:1px solid red");
    styles.insert_property("border-top-color", StyleValue::from(vec!["blue".to_owned()]));

    assert_eq!(inline(&styles, "border-top").as_deref(), Some("1px solid blue"));
    assert_eq!(styles.normalized().get("border-top-color"), None);
    assert_eq!(styles.style_names().len(), 4);
}

#[test]
fn test_border_blank_part_is_not_serialized() {
    let styles = styles("border-top-width:1px;border-top-color:");
    let inline_style = styles.inline_style();
    assert_eq!(inline_style.as_deref(), Some("border-top:1px;"));

    let reparsed = self::styles(inline_style.as_deref().unwrap_or_default());
    assert_eq!(reparsed.normalized(), styles.normalized());
}

#[test]
fn test_border_structured_blank_part_is_not_serialized() {
    let mut styles = styles("");
    let top: StyleTree = [("width", "1px"), ("color", "")].into_iter().collect();
    styles.insert_property("border-top", top);
    assert_eq!(styles.inline_style().as_deref(), Some("border-top:1px;"));
}

// Background

#[test]
fn test_background_shorthand_classification() {
    let styles = styles("background:url(a.png) no-repeat left top #fff fixed");
    assert_eq!(
        tree_json(&styles),
        json!({"background": {
            "attachment": "fixed",
            "color": "#fff",
            "image": "url(a.png)",
            "position": ["left", "top"],
            "repeat": ["no-repeat"]
        }})
    );
    assert_eq!(
        styles.inline_style().as_deref(),
        Some(
            "background-attachment:fixed;background-color:#fff;background-image:url(a.png);\
             background-position:left top;background-repeat:no-repeat;"
        )
    );
}

#[test]
fn test_background_repeated_single_value_keeps_last() {
    let styles = styles("background:red blue fixed scroll");
    assert_eq!(inline(&styles, "background-color").as_deref(), Some("blue"));
    assert_eq!(inline(&styles, "background-attachment").as_deref(), Some("scroll"));
}

#[test]
fn test_background_quoted_url() {
    let styles = styles(r#"background:url("a;b:c") red"#);
    assert_eq!(
        inline(&styles, "background-image").as_deref(),
        Some(r#"url("a;b:c")"#)
    );
    assert_eq!(inline(&styles, "background-color").as_deref(), Some("red"));
}

#[test]
fn test_background_longhand_overrides_shorthand_part() {
    let styles = styles("background:red url(a.png);background-color:blue");
    assert_eq!(inline(&styles, "background-color").as_deref(), Some("blue"));
    assert_eq!(inline(&styles, "background-image").as_deref(), Some("url(a.png)"));
}

#[test]
fn test_background_position_longhand_is_a_list() {
    let styles = styles("background-position:center 10px");
    assert_eq!(
        styles.normalized_property("background-position"),
        Some(StyleValue::from(vec!["center".to_owned(), "10px".to_owned()]))
    );
    assert_eq!(inline(&styles, "background-position").as_deref(), Some("center 10px"));
}

#[test]
fn test_background_shorthand_has_no_inline_value() {
    let styles = styles("background:red");
    assert_eq!(inline(&styles, "background"), None);
    assert_eq!(styles.style_names(), ["background-color"]);
}

#[test]
fn test_background_keyword_is_kept_verbatim() {
    let styles = styles("background:inherit");
    assert_eq!(styles.inline_style().as_deref(), Some("background:inherit;"));
    assert_eq!(inline(&styles, "background").as_deref(), Some("inherit"));
    assert!(styles.has_property("background"));
    assert_eq!(inline(&styles, "background-color"), None);
}

#[test]
fn test_background_with_unclassified_token_is_kept_whole() {
    for raw in ["url(a.png) cover", "red padding-box"] {
        let styles = styles(&format!("background:{raw}"));
        let expected = format!("background:{raw};");
        assert_eq!(styles.inline_style().as_deref(), Some(expected.as_str()));

        let reparsed = self::styles(&expected);
        assert_eq!(reparsed.normalized(), styles.normalized());
    }
}

#[test]
fn test_background_longhand_after_verbatim_shorthand() {
    let styles = styles("background:inherit;background-color:red");
    assert_eq!(styles.inline_style().as_deref(), Some("background-color:red;"));

    let styles = self::styles("background-color:red;background:inherit");
    assert_eq!(styles.inline_style().as_deref(), Some("background:inherit;"));
}
