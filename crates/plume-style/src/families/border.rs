//! [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! Border data is stored as three orthogonal side maps:
//!
//! ```text
//! border.color.{top,right,bottom,left}
//! border.style.{top,right,bottom,left}
//! border.width.{top,right,bottom,left}
//! ```
//!
//! Every border property, from `border` down to `border-top-color`, writes
//! into those twelve leaves. On output each side is written as one
//! `border-<side>` composite; the all-sides `border` shorthand is never
//! re-synthesized.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{Side, expand_sides, on_every_side};
use crate::parser::Declaration;
use crate::processor::{Normalized, StyleFamily, StylesProcessor};
use crate::tree::{StylePath, StyleTree, StyleValue};
use crate::values::{is_line_style, is_line_width, split_values};

/// One of the three sub-properties every border side has.
///
/// Declared in composite output order: `<width> <style> <color>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BorderPart {
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    Width,
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    Style,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    Color,
}

impl BorderPart {
    /// The lowercase key used in the style tree and in property names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

const BORDER_PROPERTIES: &[&str] = &[
    "border",
    "border-color",
    "border-style",
    "border-width",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-top-color",
    "border-top-style",
    "border-top-width",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-bottom-color",
    "border-bottom-style",
    "border-bottom-width",
    "border-left-color",
    "border-left-style",
    "border-left-width",
];

/// Which border property a name spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorderProperty {
    /// `border`
    All,
    /// `border-color`, `border-style`, `border-width`
    Part(BorderPart),
    /// `border-top`, ...
    Side(Side),
    /// `border-top-color`, ...
    SidePart(Side, BorderPart),
}

impl BorderProperty {
    fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix("border")?;
        if rest.is_empty() {
            return Some(Self::All);
        }
        let rest = rest.strip_prefix('-')?;
        match rest.split_once('-') {
            None => rest
                .parse()
                .map(Self::Part)
                .or_else(|_| rest.parse().map(Self::Side))
                .ok(),
            Some((side, part)) => Some(Self::SidePart(side.parse().ok()?, part.parse().ok()?)),
        }
    }
}

/// [§ 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "`<line-width> || <line-style> || <color>`"
///
/// One side's composite value. Tokens are classified by shape: line widths,
/// then line-style keywords, then anything else is a color. A repeated part
/// keeps its last token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Composite<'a> {
    width: Option<&'a str>,
    style: Option<&'a str>,
    color: Option<&'a str>,
}

impl<'a> Composite<'a> {
    fn parse(value: &'a str) -> Self {
        let mut composite = Self::default();
        for token in split_values(value) {
            if is_line_width(token) {
                composite.width = Some(token);
            } else if is_line_style(token) {
                composite.style = Some(token);
            } else {
                composite.color = Some(token);
            }
        }
        composite
    }

    fn parts(&self) -> [(BorderPart, Option<&'a str>); 3] {
        [
            (BorderPart::Width, self.width),
            (BorderPart::Style, self.style),
            (BorderPart::Color, self.color),
        ]
    }
}

/// `<width> <style> <color>` from whichever parts `lookup` finds.
fn composite_string(lookup: impl Fn(BorderPart) -> Option<String>) -> Option<String> {
    let parts: Vec<String> = BorderPart::iter()
        .filter_map(lookup)
        .filter(|part| !part.trim().is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// The border family.
struct Border;

impl Border {
    fn root() -> StylePath {
        StylePath::new(["border"])
    }

    fn leaf(part: BorderPart, side: Side) -> StylePath {
        StylePath::new(["border", part.as_str(), side.as_str()])
    }

    /// `{part: {side: value}}` for every part `composite` has.
    fn side_write(side: Side, parts: &[(BorderPart, Option<&str>)]) -> StyleTree {
        parts
            .iter()
            .filter_map(|&(part, value)| {
                let value = value?;
                let sides: StyleTree = [(side.as_str(), value)].into_iter().collect();
                Some((part.as_str(), StyleValue::Map(sides)))
            })
            .collect()
    }

    /// Write a textual value. Token lists arrive here joined by spaces.
    fn normalize_text(property: BorderProperty, raw: &str) -> Normalized {
        match property {
            BorderProperty::All => {
                let composite = Composite::parse(raw);
                let tree: StyleTree = composite
                    .parts()
                    .into_iter()
                    .filter_map(|(part, value)| {
                        Some((part.as_str(), StyleValue::Map(on_every_side(value?))))
                    })
                    .collect();
                Normalized::new(Self::root(), tree)
            }
            BorderProperty::Part(part) => {
                Normalized::new(Self::root().child(part.as_str()), expand_sides(raw))
            }
            BorderProperty::Side(side) => {
                let composite = Composite::parse(raw);
                Normalized::new(Self::root(), Self::side_write(side, &composite.parts()))
            }
            BorderProperty::SidePart(side, part) => Normalized::new(Self::leaf(part, side), raw),
        }
    }

    /// One side's `{width, style, color}` as stored in `styles`.
    fn side_value(styles: &StyleTree, side: Side) -> StyleTree {
        BorderPart::iter()
            .filter_map(|part| {
                let value = styles.get_path(&Self::leaf(part, side))?;
                Some((part.as_str(), value.clone()))
            })
            .collect()
    }
}

impl StyleFamily for Border {
    fn properties(&self) -> &[&'static str] {
        BORDER_PROPERTIES
    }

    fn normalize(&self, name: &str, value: &StyleValue) -> Option<Normalized> {
        let property = BorderProperty::parse(name)?;
        let StyleValue::Map(given) = value else {
            return Some(Self::normalize_text(property, &value.to_inline_string()?));
        };
        let normalized = match property {
            // A pre-structured `{width, style, color}` for one side fans out
            // the same way a composite string does.
            BorderProperty::Side(side) => {
                let parts: Vec<(BorderPart, Option<&str>)> = BorderPart::iter()
                    .map(|part| (part, given.get(part.as_str()).and_then(StyleValue::as_scalar)))
                    .collect();
                Normalized::new(Self::root(), Self::side_write(side, &parts))
            }
            BorderProperty::All => Normalized::new(Self::root(), value.clone()),
            BorderProperty::Part(part) => {
                Normalized::new(Self::root().child(part.as_str()), value.clone())
            }
            BorderProperty::SidePart(..) => return None,
        };
        Some(normalized)
    }

    fn paths(&self, name: &str) -> Vec<StylePath> {
        match BorderProperty::parse(name) {
            Some(BorderProperty::Part(part)) => vec![Self::root().child(part.as_str())],
            Some(BorderProperty::Side(side)) => BorderPart::iter()
                .map(|part| Self::leaf(part, side))
                .collect(),
            Some(BorderProperty::SidePart(side, part)) => vec![Self::leaf(part, side)],
            Some(BorderProperty::All) | None => vec![Self::root()],
        }
    }

    fn extract(&self, name: &str, styles: &StyleTree) -> Option<StyleValue> {
        match BorderProperty::parse(name)? {
            BorderProperty::Side(side) => {
                let value = Self::side_value(styles, side);
                (!value.is_empty()).then_some(StyleValue::Map(value))
            }
            BorderProperty::SidePart(side, part) => {
                styles.get_path(&Self::leaf(part, side)).cloned()
            }
            BorderProperty::Part(part) => {
                styles.get_path(&Self::root().child(part.as_str())).cloned()
            }
            BorderProperty::All => styles.get("border").cloned(),
        }
    }

    fn reduce(&self, name: &str, value: &StyleValue) -> Option<Vec<Declaration>> {
        let tree = value.as_map()?;
        let declarations = match BorderProperty::parse(name)? {
            // Every side as its own composite; never a lossy `border` guess.
            BorderProperty::All => Side::iter()
                .filter_map(|side| {
                    let composite = composite_string(|part| {
                        tree.get(part.as_str())?
                            .as_map()?
                            .get(side.as_str())?
                            .to_inline_string()
                    })?;
                    Some(Declaration::new(format!("border-{side}"), composite))
                })
                .collect(),
            BorderProperty::Side(side) => {
                let composite = composite_string(|part| {
                    tree.get(part.as_str())?.to_inline_string()
                });
                composite
                    .map(|composite| Declaration::new(format!("border-{side}"), composite))
                    .into_iter()
                    .collect()
            }
            BorderProperty::Part(part) => Side::iter()
                .filter_map(|side| {
                    let leaf = tree.get(side.as_str())?.to_inline_string()?;
                    (!leaf.trim().is_empty())
                        .then(|| Declaration::new(format!("border-{side}-{part}"), leaf))
                })
                .collect(),
            BorderProperty::SidePart(..) => return None,
        };
        Some(declarations)
    }
}

/// Install the `border` family.
pub fn add_border_rules(processor: &StylesProcessor) {
    let _ = processor.register("border", |processor| {
        processor.add_family(Border);
    });
}
