//! The per-node style facade.
//!
//! A [`StylesMap`] is owned by exactly one style-bearing node. It holds that
//! node's normalized [`StyleTree`] and answers every query about it through
//! a shared [`StylesProcessor`].

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::parser::{Declaration, parse_declarations};
use crate::processor::StylesProcessor;
use crate::tree::{StyleTree, StyleValue};

/// Normalized inline styles of one node.
///
/// Every operation is total: unknown properties are stored and echoed back
/// verbatim, and malformed input degrades through the tolerant parser.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use plume_style::{StylesMap, StylesProcessor};
///
/// let processor = Rc::new(StylesProcessor::with_default_rules());
/// let mut styles = StylesMap::new(processor);
/// styles.set_style("border:1px solid blue;border-left:#665511 dashed 2.7em");
///
/// assert_eq!(styles.inline_property("border-left").as_deref(), Some("2.7em dashed #665511"));
/// assert_eq!(styles.inline_property("border-top").as_deref(), Some("1px solid blue"));
/// ```
#[derive(Clone)]
pub struct StylesMap {
    processor: Rc<StylesProcessor>,
    styles: StyleTree,
}

impl StylesMap {
    /// An empty style map interpreting properties through `processor`.
    #[must_use]
    pub fn new(processor: Rc<StylesProcessor>) -> Self {
        Self {
            processor,
            styles: StyleTree::new(),
        }
    }

    /// A style map holding the parsed `raw` style string.
    #[must_use]
    pub fn from_style(processor: Rc<StylesProcessor>, raw: &str) -> Self {
        let mut styles = Self::new(processor);
        styles.set_style(raw);
        styles
    }

    /// The processor this map interprets properties through.
    #[must_use]
    pub const fn processor(&self) -> &Rc<StylesProcessor> {
        &self.processor
    }

    /// Replace everything with the declarations parsed from `raw`.
    ///
    /// Later declarations override earlier ones leaf by leaf, so
    /// `margin:2em;margin-top:1px` keeps `2em` on the other three sides.
    pub fn set_style(&mut self, raw: &str) {
        self.styles.clear();
        for Declaration { name, value } in parse_declarations(raw) {
            self.processor
                .normalize_into(&name, &StyleValue::Scalar(value), &mut self.styles);
        }
    }

    /// Set one property. `value` may be a raw string or a pre-structured
    /// value; structured values merge into what is already stored.
    pub fn insert_property(&mut self, name: &str, value: impl Into<StyleValue>) {
        self.processor
            .normalize_into(name, &value.into(), &mut self.styles);
    }

    /// Set several properties in iteration order.
    pub fn insert_properties<I, K, V>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        for (name, value) in properties {
            self.insert_property(name.as_ref(), value);
        }
    }

    /// Remove a property: every tree location it covers, plus any verbatim
    /// entry stored under its literal name. Removing a longhand leaves its
    /// sibling sides in place.
    pub fn remove_property(&mut self, name: &str) {
        for path in self.processor.paths(name) {
            let _ = self.styles.remove_path(&path);
        }
        let _ = self.styles.remove(name);
    }

    /// Whether `name` has a value that serializes as a declaration of
    /// exactly that name.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.inline_property(name).is_some()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// A copy of the whole normalized tree.
    #[must_use]
    pub fn normalized(&self) -> StyleTree {
        self.styles.clone()
    }

    /// The normalized value of `name`, possibly assembled from several
    /// leaves (`border-top` → `{width, style, color}`).
    #[must_use]
    pub fn normalized_property(&self, name: &str) -> Option<StyleValue> {
        self.processor.query(name, &self.styles)
    }

    /// The serialized value of exactly `name`.
    ///
    /// Shorthands whose reduction writes only longhands (`margin`, `border`)
    /// have no inline value of their own.
    #[must_use]
    pub fn inline_property(&self, name: &str) -> Option<String> {
        if let Some(StyleValue::Scalar(value)) = self.styles.get(name) {
            return Some(value.clone());
        }
        self.processor
            .reduced_form(name, &self.styles)
            .into_iter()
            .find(|declaration| declaration.name == name)
            .map(|declaration| declaration.value)
    }

    /// Every declaration this map serializes to, sorted by name.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations: Vec<Declaration> = self
            .styles
            .iter()
            .flat_map(|(name, value)| self.processor.reduce(name, value))
            .collect();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        declarations
    }

    /// The canonical style string: `name:value;` per declaration, sorted by
    /// name, no extra whitespace. `None` when nothing is set.
    #[must_use]
    pub fn inline_style(&self) -> Option<String> {
        let declarations = self.declarations();
        if declarations.is_empty() {
            return None;
        }
        Some(
            declarations
                .iter()
                .map(ToString::to_string)
                .collect::<String>(),
        )
    }

    /// The names [`inline_style`](Self::inline_style) would emit, in the
    /// same order.
    #[must_use]
    pub fn style_names(&self) -> Vec<String> {
        self.declarations()
            .into_iter()
            .map(|declaration| declaration.name)
            .collect()
    }

    /// Every name with a value, including the shorthands and longhands that
    /// are only reachable through extraction (`border-top`, `margin-left`),
    /// sorted.
    #[must_use]
    pub fn expanded_style_names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.styles.keys().cloned().collect();
        for name in self.processor.property_names() {
            if self
                .normalized_property(name)
                .is_some_and(|value| !value.is_empty())
            {
                let _ = names.insert(name.to_owned());
            }
        }
        names.into_iter().collect()
    }

    /// Number of declarations [`inline_style`](Self::inline_style) emits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.style_names().len()
    }

    /// Remove every property.
    pub fn clear(&mut self) {
        self.styles.clear();
    }
}

/// The inline style, or the empty string when nothing is set.
impl fmt::Display for StylesMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inline_style().as_deref().unwrap_or_default())
    }
}

impl fmt::Debug for StylesMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylesMap")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
