//! Normalized style storage.
//!
//! A [`StyleTree`] is a nested mapping addressed by dotted [`StylePath`]s
//! (`border.color.top`). Leaves are strings or ordered string lists. Every
//! shorthand and longhand spelling of one concrete property converges on a
//! single leaf, so the tree is the one source of truth for a node's styling.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::Serialize;

/// A value stored in a [`StyleTree`].
///
/// Serializes untagged: scalars as strings, lists as arrays, maps as objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A single raw value, e.g. `"1px"`.
    Scalar(String),
    /// An ordered list of tokens, e.g. background positions `["left", "top"]`.
    List(Vec<String>),
    /// A sub-tree keyed by side or sub-property.
    Map(StyleTree),
}

impl StyleValue {
    /// The scalar text, if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The sub-tree, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&StyleTree> {
        match self {
            Self::Map(tree) => Some(tree),
            _ => None,
        }
    }

    /// Whether this is a map (a structured value).
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// An empty list or an empty map. Empty scalars are still values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::List(items) => items.is_empty(),
            Self::Map(tree) => tree.is_empty(),
        }
    }

    /// Whether this carries no text at all: a whitespace-only scalar, a list
    /// of such scalars, or an empty map.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Scalar(value) => value.trim().is_empty(),
            Self::List(items) => items.iter().all(|item| item.trim().is_empty()),
            Self::Map(tree) => tree.is_empty(),
        }
    }

    /// The text this leaf serializes to: scalars verbatim, lists joined by a
    /// single space. Maps have no inline form.
    #[must_use]
    pub fn to_inline_string(&self) -> Option<String> {
        match self {
            Self::Scalar(value) => Some(value.clone()),
            Self::List(items) => Some(items.join(" ")),
            Self::Map(_) => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(tree: StyleTree) -> Self {
        Self::Map(tree)
    }
}

/// A dotted address into a [`StyleTree`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StylePath(Vec<String>);

impl StylePath {
    /// A path from explicit segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// A path from dotted notation: `"border.color.top"`.
    #[must_use]
    pub fn dotted(path: &str) -> Self {
        Self::new(path.split('.'))
    }

    /// The default path of a property name: its first hyphen becomes a dot,
    /// so `margin-top` addresses `margin.top` and `border-top-color`
    /// addresses `border` → `top-color`.
    #[must_use]
    pub fn from_property(name: &str) -> Self {
        Self::dotted(&name.replacen('-', ".", 1))
    }

    /// The path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// This path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for StylePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Nested, path-addressable style storage.
///
/// Keys iterate in lexicographic order, which keeps every derived output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleTree(BTreeMap<String, StyleValue>);

impl StyleTree {
    /// An empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Top-level entries in key order.
    #[must_use]
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }

    /// Top-level keys in order.
    #[must_use]
    pub fn keys(&self) -> btree_map::Keys<'_, String, StyleValue> {
        self.0.keys()
    }

    /// The top-level entry stored under the literal `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Store `value` under the literal `key`, replacing what was there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let _ = self.0.insert(key.into(), value.into());
    }

    /// Remove the top-level entry under the literal `key`.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.remove(key)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The value at `path`, if every segment exists.
    #[must_use]
    pub fn get_path(&self, path: &StylePath) -> Option<&StyleValue> {
        let (last, parents) = path.segments().split_last()?;
        let mut tree = self;
        for segment in parents {
            tree = tree.0.get(segment)?.as_map()?;
        }
        tree.0.get(last)
    }

    /// Store `value` at `path`, replacing whatever was there. Missing
    /// intermediate maps are created and leaves in the way are replaced.
    pub fn set_path(&mut self, path: &StylePath, value: StyleValue) {
        if let Some(slot) = self.slot_mut(path) {
            *slot = value;
        }
    }

    /// Write `value` at `path`. A map is deep-merged into a map already at
    /// `path` so sibling leaves survive; anything else replaces. An empty map
    /// writes nothing.
    pub fn merge_path(&mut self, path: &StylePath, value: StyleValue) {
        if value.as_map().is_some_and(Self::is_empty) {
            return;
        }
        let Some(slot) = self.slot_mut(path) else {
            return;
        };
        match (slot, value) {
            (StyleValue::Map(existing), StyleValue::Map(incoming)) => existing.merge(incoming),
            (slot, value) => *slot = value,
        }
    }

    /// Deep-merge `other` into `self`: maps merge recursively, everything
    /// else in `other` replaces the entry in `self`.
    pub fn merge(&mut self, other: Self) {
        for (key, incoming) in other.0 {
            match incoming {
                StyleValue::Map(incoming) => {
                    if let Some(StyleValue::Map(existing)) = self.0.get_mut(&key) {
                        existing.merge(incoming);
                    } else if !incoming.is_empty() {
                        let _ = self.0.insert(key, StyleValue::Map(incoming));
                    }
                }
                leaf => {
                    let _ = self.0.insert(key, leaf);
                }
            }
        }
    }

    /// Remove the value at `path`, then drop any maps left empty along it.
    pub fn remove_path(&mut self, path: &StylePath) -> Option<StyleValue> {
        let (first, rest) = path.segments().split_first()?;
        if rest.is_empty() {
            return self.0.remove(first);
        }
        let StyleValue::Map(child) = self.0.get_mut(first)? else {
            return None;
        };
        let removed = child.remove_path(&StylePath::new(rest.iter().cloned()));
        if child.is_empty() {
            let _ = self.0.remove(first);
        }
        removed
    }

    /// A mutable slot at `path`, created as an empty map if missing.
    fn slot_mut(&mut self, path: &StylePath) -> Option<&mut StyleValue> {
        let (last, parents) = path.segments().split_last()?;
        let mut tree = self;
        for segment in parents {
            let entry = tree
                .0
                .entry(segment.clone())
                .or_insert_with(|| StyleValue::Map(Self::new()));
            if !entry.is_map() {
                *entry = StyleValue::Map(Self::new());
            }
            let StyleValue::Map(child) = entry else {
                return None;
            };
            tree = child;
        }
        Some(
            tree.0
                .entry(last.clone())
                .or_insert_with(|| StyleValue::Map(Self::new())),
        )
    }
}

impl<'a> IntoIterator for &'a StyleTree {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleTree
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
