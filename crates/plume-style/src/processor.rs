//! The styles processor: a registry of property families.
//!
//! Every [`StylesMap`](crate::StylesMap) consults one shared processor to turn
//! raw declarations into tree writes (normalize), to read derived values back
//! out of a tree (extract), and to flatten structured values into
//! declarations for output (reduce).
//!
//! Families install themselves through [`StylesProcessor::register`], which
//! runs each family's install function at most once per processor no matter
//! how many style maps ask for it.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

use crate::families;
use crate::parser::Declaration;
use crate::tree::{StylePath, StyleTree, StyleValue};

/// Where a normalized value goes in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Target path. Maps merge into whatever is already there.
    pub path: StylePath,
    /// The normalized value.
    pub value: StyleValue,
}

impl Normalized {
    /// A normalized value at `path`.
    #[must_use]
    pub fn new(path: StylePath, value: impl Into<StyleValue>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// Normalize / extract / reduce logic for one group of related properties.
///
/// Every hook receives the property name it was looked up by, so one family
/// value serves all of its names. Returning `None` from a hook falls back to
/// the processor's default behavior for that name.
pub trait StyleFamily {
    /// Every property name this family interprets.
    fn properties(&self) -> &[&'static str];

    /// Turn a raw (or pre-structured) value for `name` into a tree write.
    fn normalize(&self, name: &str, value: &StyleValue) -> Option<Normalized>;

    /// The tree locations `name` covers. Removing `name` removes these, and
    /// two names are related when one covers an ancestor of the other.
    fn paths(&self, name: &str) -> Vec<StylePath>;

    /// Assemble the value of `name` from the tree, when it is not stored at a
    /// single path.
    fn extract(&self, _name: &str, _styles: &StyleTree) -> Option<StyleValue> {
        None
    }

    /// Flatten `value`, the normalized value of `name`, into declarations.
    fn reduce(&self, _name: &str, _value: &StyleValue) -> Option<Vec<Declaration>> {
        None
    }
}

/// The shared registry of property families.
///
/// Mutated only through [`register`](Self::register); safe to share between
/// many style maps as `Rc<StylesProcessor>`.
#[derive(Default)]
pub struct StylesProcessor {
    /// Property name → family interpreting it.
    families: RefCell<HashMap<&'static str, Rc<dyn StyleFamily>>>,
    /// Names passed to `register` so far.
    installed: RefCell<HashSet<String>>,
}

impl StylesProcessor {
    /// A processor with no families: every property is stored verbatim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor with the margin, padding, border, and background families.
    #[must_use]
    pub fn with_default_rules() -> Self {
        let processor = Self::new();
        families::add_default_rules(&processor);
        processor
    }

    /// Run `install` unless a family called `family` was already registered.
    ///
    /// Returns whether `install` ran.
    pub fn register(&self, family: &str, install: impl FnOnce(&Self)) -> bool {
        let fresh = self.installed.borrow_mut().insert(family.to_owned());
        if fresh {
            install(self);
        }
        fresh
    }

    /// Whether a family called `family` was registered.
    #[must_use]
    pub fn is_registered(&self, family: &str) -> bool {
        self.installed.borrow().contains(family)
    }

    /// Route every property of `family` to it. Called from install functions.
    pub fn add_family(&self, family: impl StyleFamily + 'static) {
        let family: Rc<dyn StyleFamily> = Rc::new(family);
        let mut families = self.families.borrow_mut();
        for &name in family.properties() {
            let _ = families.insert(name, Rc::clone(&family));
        }
    }

    /// Whether some family interprets `name`.
    #[must_use]
    pub fn handles(&self, name: &str) -> bool {
        self.families.borrow().contains_key(name)
    }

    /// Every interpreted property name, sorted.
    #[must_use]
    pub fn property_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.families.borrow().keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn family(&self, name: &str) -> Option<Rc<dyn StyleFamily>> {
        self.families.borrow().get(name).map(Rc::clone)
    }

    /// Where `value` for `name` goes in the tree.
    ///
    /// Uninterpreted scalars stay under their literal name; uninterpreted
    /// maps go to the property's default path.
    #[must_use]
    pub fn normalize(&self, name: &str, value: &StyleValue) -> Normalized {
        if let Some(normalized) = self
            .family(name)
            .and_then(|family| family.normalize(name, value))
        {
            return normalized;
        }
        let path = if value.is_map() {
            StylePath::from_property(name)
        } else {
            StylePath::new([name])
        };
        Normalized::new(path, value.clone())
    }

    /// Normalize `value` for `name` and merge it into `styles`.
    ///
    /// A blank value for an interpreted name writes nothing. Uninterpreted
    /// names keep even an empty value verbatim.
    pub fn normalize_into(&self, name: &str, value: &StyleValue, styles: &mut StyleTree) {
        if value.is_blank() && self.handles(name) {
            return;
        }
        let Normalized { path, value } = self.normalize(name, value);
        #[cfg(feature = "style-trace")]
        eprintln!("[STYLE] normalize {name} -> {path} = {value:?}");
        styles.merge_path(&path, value);
    }

    /// The value of `name` in `styles`.
    ///
    /// A literal top-level entry wins, then the family's extractor, then the
    /// property's default path.
    #[must_use]
    pub fn query(&self, name: &str, styles: &StyleTree) -> Option<StyleValue> {
        if let Some(value) = styles.get(name) {
            return Some(value.clone());
        }
        if let Some(value) = self
            .family(name)
            .and_then(|family| family.extract(name, styles))
        {
            return Some(value);
        }
        styles.get_path(&StylePath::from_property(name)).cloned()
    }

    /// Flatten `value`, the normalized value of `name`, into declarations.
    ///
    /// Without a family reducer, a leaf becomes one declaration and a map
    /// becomes one declaration per leaf with path segments joined by `-`.
    #[must_use]
    pub fn reduce(&self, name: &str, value: &StyleValue) -> Vec<Declaration> {
        if let Some(declarations) = self
            .family(name)
            .and_then(|family| family.reduce(name, value))
        {
            return declarations;
        }
        let mut declarations = Vec::new();
        flatten_into(name, value, &mut declarations);
        declarations
    }

    /// Query `name` and reduce the result. Empty when `name` has no value.
    #[must_use]
    pub fn reduced_form(&self, name: &str, styles: &StyleTree) -> Vec<Declaration> {
        self.query(name, styles)
            .map(|value| self.reduce(name, &value))
            .unwrap_or_default()
    }

    /// The tree locations `name` covers.
    #[must_use]
    pub fn paths(&self, name: &str) -> Vec<StylePath> {
        self.family(name).map_or_else(
            || vec![StylePath::from_property(name)],
            |family| family.paths(name),
        )
    }

    /// Interpreted names whose coverage overlaps `name`'s: its shorthands and
    /// its longhands. Sorted, without `name` itself.
    #[must_use]
    pub fn related_styles(&self, name: &str) -> Vec<&'static str> {
        let Some(family) = self.family(name) else {
            return Vec::new();
        };
        let own = family.paths(name);
        let related: BTreeSet<&'static str> = family
            .properties()
            .iter()
            .copied()
            .filter(|&other| other != name)
            .filter(|other| overlaps(&own, &family.paths(other)))
            .collect();
        related.into_iter().collect()
    }
}

fn overlaps(ours: &[StylePath], theirs: &[StylePath]) -> bool {
    ours.iter().any(|mine| {
        theirs
            .iter()
            .any(|path| mine.is_prefix_of(path) || path.is_prefix_of(mine))
    })
}

fn flatten_into(name: &str, value: &StyleValue, declarations: &mut Vec<Declaration>) {
    match value {
        StyleValue::Map(tree) => {
            for (key, child) in tree {
                flatten_into(&format!("{name}-{key}"), child, declarations);
            }
        }
        leaf => {
            if let Some(text) = leaf.to_inline_string() {
                declarations.push(Declaration::new(name, text));
            }
        }
    }
}
