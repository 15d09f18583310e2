//! Property families.
//!
//! Each family owns a group of related property names and knows how their
//! shorthand and longhand spellings map onto shared leaves of the style tree.
//! Install them into a [`StylesProcessor`] with the `add_*_rules` functions;
//! installing twice is a no-op.

mod background;
mod border;
mod box_sides;

pub use background::{BackgroundPart, add_background_rules};
pub use border::{BorderPart, add_border_rules};
pub use box_sides::{add_margin_rules, add_padding_rules};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::processor::StylesProcessor;
use crate::tree::StyleTree;
use crate::values::split_values;

/// [§ 6.1 Physical sides](https://www.w3.org/TR/css-box-4/#margin-physical)
///
/// A physical side of a box, in shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

impl Side {
    /// The lowercase key used in the style tree and in property names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Install every built-in family: margin, padding, border, background.
pub fn add_default_rules(processor: &StylesProcessor) {
    add_margin_rules(processor);
    add_padding_rules(processor);
    add_border_rules(processor);
    add_background_rules(processor);
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// Expand a 1–4 value side shorthand into a `{top, right, bottom, left}`
/// map.
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
///
/// Values beyond the fourth are ignored; an empty value yields an empty map.
#[must_use]
pub fn expand_sides(value: &str) -> StyleTree {
    let tokens = split_values(value);
    let [top, right, bottom, left] = match tokens.as_slice() {
        [] => return StyleTree::new(),
        [all] => [all; 4],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left, ..] => [top, right, bottom, left],
    };
    [(Side::Top, top), (Side::Right, right), (Side::Bottom, bottom), (Side::Left, left)]
        .into_iter()
        .map(|(side, token)| (side.as_str(), *token))
        .collect()
}

/// The same `value` on every side.
fn on_every_side(value: &str) -> StyleTree {
    Side::iter().map(|side| (side.as_str(), value)).collect()
}
