//! [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
//!
//! The `background` shorthand is tokenized and each token classified into
//! exactly one sub-property, stored as `background.<part>`.

use plume_common::warning::warn_once;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::parser::Declaration;
use crate::processor::{Normalized, StyleFamily, StylesProcessor};
use crate::tree::{StylePath, StyleTree, StyleValue};
use crate::values::{is_attachment, is_color, is_image, is_position, is_repeat, split_values};

/// A background sub-property, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BackgroundPart {
    /// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
    Attachment,
    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    Color,
    /// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
    Image,
    /// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    Position,
    /// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
    Repeat,
}

impl BackgroundPart {
    /// The lowercase key used in the style tree and in property names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position and repeat accumulate tokens; the rest hold one value.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Position | Self::Repeat)
    }

    /// Classify one shorthand token. Predicates are tried in a fixed order:
    /// repeat, position, attachment, color, image.
    #[must_use]
    pub fn classify(token: &str) -> Option<Self> {
        if is_repeat(token) {
            Some(Self::Repeat)
        } else if is_position(token) {
            Some(Self::Position)
        } else if is_attachment(token) {
            Some(Self::Attachment)
        } else if is_color(token) {
            Some(Self::Color)
        } else if is_image(token) {
            Some(Self::Image)
        } else {
            None
        }
    }
}

const BACKGROUND_PROPERTIES: &[&str] = &[
    "background",
    "background-attachment",
    "background-color",
    "background-image",
    "background-position",
    "background-repeat",
];

/// [§ 3.10 'background' shorthand](https://www.w3.org/TR/css-backgrounds-3/#background)
///
/// Repeat and position tokens accumulate in source order. For the
/// single-valued parts a repeated token replaces the earlier one, so the last
/// occurrence wins.
///
/// A value with any token that matches no part (`inherit`, `cover`,
/// `padding-box`) is not split at all: it stays a scalar and is written back
/// as `background:<value>`.
fn normalize_shorthand(value: &str) -> StyleValue {
    let mut repeat = Vec::new();
    let mut position = Vec::new();
    let mut background = StyleTree::new();

    for token in split_values(value) {
        match BackgroundPart::classify(token) {
            Some(BackgroundPart::Repeat) => repeat.push(token.to_owned()),
            Some(BackgroundPart::Position) => position.push(token.to_owned()),
            Some(part) => background.insert(part.as_str(), token),
            None => {
                let message = format!(
                    "background token '{token}' matches no background property; \
                     keeping the value verbatim"
                );
                warn_once("Style", &message);
                return StyleValue::from(value);
            }
        }
    }
    if !position.is_empty() {
        background.insert(BackgroundPart::Position.as_str(), position);
    }
    if !repeat.is_empty() {
        background.insert(BackgroundPart::Repeat.as_str(), repeat);
    }
    StyleValue::Map(background)
}

/// The background family.
struct Background;

impl Background {
    fn root() -> StylePath {
        StylePath::new(["background"])
    }

    fn part_of(name: &str) -> Option<BackgroundPart> {
        name.strip_prefix("background-")?.parse().ok()
    }
}

impl StyleFamily for Background {
    fn properties(&self) -> &[&'static str] {
        BACKGROUND_PROPERTIES
    }

    fn normalize(&self, name: &str, value: &StyleValue) -> Option<Normalized> {
        let normalized = match (Self::part_of(name), value) {
            (None, StyleValue::Map(_)) => Normalized::new(Self::root(), value.clone()),
            (None, leaf) => {
                Normalized::new(Self::root(), normalize_shorthand(&leaf.to_inline_string()?))
            }
            (Some(_), StyleValue::Map(_)) => return None,
            (Some(part), StyleValue::Scalar(raw)) if part.is_list() => {
                let tokens: Vec<String> = split_values(raw).into_iter().map(str::to_owned).collect();
                Normalized::new(Self::root().child(part.as_str()), tokens)
            }
            (Some(part), StyleValue::List(_)) if part.is_list() => {
                Normalized::new(Self::root().child(part.as_str()), value.clone())
            }
            (Some(part), leaf) => {
                Normalized::new(Self::root().child(part.as_str()), leaf.to_inline_string()?)
            }
        };
        Some(normalized)
    }

    fn paths(&self, name: &str) -> Vec<StylePath> {
        match Self::part_of(name) {
            Some(part) => vec![Self::root().child(part.as_str())],
            None => vec![Self::root()],
        }
    }

    fn extract(&self, name: &str, styles: &StyleTree) -> Option<StyleValue> {
        let part = Self::part_of(name)?;
        styles.get_path(&Self::root().child(part.as_str())).cloned()
    }

    /// One longhand per set part, lists joined by spaces.
    fn reduce(&self, name: &str, value: &StyleValue) -> Option<Vec<Declaration>> {
        if Self::part_of(name).is_some() {
            return None;
        }
        let background = value.as_map()?;
        Some(
            BackgroundPart::iter()
                .filter_map(|part| {
                    let leaf = background.get(part.as_str())?.to_inline_string()?;
                    (!leaf.trim().is_empty())
                        .then(|| Declaration::new(format!("background-{part}"), leaf))
                })
                .collect(),
        )
    }
}

/// Install the `background` family.
pub fn add_background_rules(processor: &StylesProcessor) {
    let _ = processor.register("background", |processor| {
        processor.add_family(Background);
    });
}
