//! [§ 6 Margins and Paddings](https://www.w3.org/TR/css-box-4/#margins)
//!
//! `margin` and `padding` share one shape: a 1–4 value shorthand over four
//! side longhands, stored as `<family>.<side>` leaves.

use strum::IntoEnumIterator;

use super::{Side, expand_sides};
use crate::parser::Declaration;
use crate::processor::{Normalized, StyleFamily, StylesProcessor};
use crate::tree::{StylePath, StyleValue};

const MARGIN_PROPERTIES: &[&str] = &[
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
];

const PADDING_PROPERTIES: &[&str] = &[
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];

/// A side-shorthand family such as `margin`.
struct BoxSides {
    shorthand: &'static str,
    properties: &'static [&'static str],
}

impl BoxSides {
    /// The side a longhand name addresses, or `None` for the shorthand.
    fn side_of(&self, name: &str) -> Option<Side> {
        name.strip_prefix(self.shorthand)?
            .strip_prefix('-')?
            .parse()
            .ok()
    }

    fn root(&self) -> StylePath {
        StylePath::new([self.shorthand])
    }
}

impl StyleFamily for BoxSides {
    fn properties(&self) -> &[&'static str] {
        self.properties
    }

    fn normalize(&self, name: &str, value: &StyleValue) -> Option<Normalized> {
        let normalized = match (self.side_of(name), value) {
            (None, StyleValue::Map(_)) => Normalized::new(self.root(), value.clone()),
            // [§ 6.2 'margin' shorthand](https://www.w3.org/TR/css-box-4/#margin-shorthand)
            (None, leaf) => Normalized::new(self.root(), expand_sides(&leaf.to_inline_string()?)),
            // A side holds one value; a token list is stored as its text.
            (Some(side), StyleValue::Scalar(_) | StyleValue::List(_)) => Normalized::new(
                self.root().child(side.as_str()),
                value.to_inline_string()?,
            ),
            (Some(_), StyleValue::Map(_)) => return None,
        };
        Some(normalized)
    }

    fn paths(&self, name: &str) -> Vec<StylePath> {
        match self.side_of(name) {
            Some(side) => vec![self.root().child(side.as_str())],
            None => vec![self.root()],
        }
    }

    /// The shorthand reduces to one longhand per set side. Four equal sides
    /// are still written out individually.
    fn reduce(&self, name: &str, value: &StyleValue) -> Option<Vec<Declaration>> {
        if name != self.shorthand {
            return None;
        }
        let sides = value.as_map()?;
        Some(
            Side::iter()
                .filter_map(|side| {
                    let leaf = sides.get(side.as_str())?.to_inline_string()?;
                    (!leaf.trim().is_empty())
                        .then(|| Declaration::new(format!("{}-{side}", self.shorthand), leaf))
                })
                .collect(),
        )
    }
}

/// Install the `margin` family.
pub fn add_margin_rules(processor: &StylesProcessor) {
    let _ = processor.register("margin", |processor| {
        processor.add_family(BoxSides {
            shorthand: "margin",
            properties: MARGIN_PROPERTIES,
        });
    });
}

/// Install the `padding` family.
pub fn add_padding_rules(processor: &StylesProcessor) {
    let _ = processor.register("padding", |processor| {
        processor.add_family(BoxSides {
            shorthand: "padding",
            properties: PADDING_PROPERTIES,
        });
    });
}
