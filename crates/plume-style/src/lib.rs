//! Inline style parsing, normalization, and canonical re-serialization.
//!
//! # Scope
//!
//! This crate implements:
//! - **Declaration Parser** ([CSS Style Attributes](https://www.w3.org/TR/css-style-attr/))
//!   - Quote-aware scanning of `name:value;` sequences
//!   - Tolerant recovery with typed diagnostics
//!
//! - **Normalized Style Tree**
//!   - Path-addressable nested storage (`border.color.top`)
//!   - Deep merge for partial structured writes
//!
//! - **Styles Processor**
//!   - Per-property normalize / extract / reduce hooks supplied by family plugins
//!   - Idempotent family registration shared by every style map
//!
//! - **Property Families** ([CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/),
//!   [CSS Box Model Level 4](https://www.w3.org/TR/css-box-4/))
//!   - `margin`, `padding`, `border`, `background` shorthands and longhands
//!
//! - **Styles Map**
//!   - The per-node query/mutation facade emitting canonical, sorted output
//!
//! # Not Interpreted
//!
//! - Cascade, selectors, computed or inherited values
//! - Any property outside a registered family (stored and echoed verbatim)
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use plume_style::{StylesMap, StylesProcessor};
//!
//! let processor = Rc::new(StylesProcessor::with_default_rules());
//! let mut styles = StylesMap::new(Rc::clone(&processor));
//! styles.set_style("margin:2em;margin-top:1px");
//!
//! assert_eq!(styles.inline_property("margin-top").as_deref(), Some("1px"));
//! assert_eq!(
//!     styles.inline_style().as_deref(),
//!     Some("margin-bottom:2em;margin-left:2em;margin-right:2em;margin-top:1px;")
//! );
//! ```

/// Property family plugins: margin, padding, border, background.
pub mod families;
/// Declaration parser per [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/#syntax).
pub mod parser;
/// Registry of per-property normalize / extract / reduce hooks.
pub mod processor;
/// The per-node style facade.
pub mod styles_map;
/// Path-addressable normalized style storage.
pub mod tree;
/// Token classification for component values.
pub mod values;

// Re-exports for convenience
pub use families::{
    BackgroundPart, BorderPart, Side, add_background_rules, add_border_rules, add_default_rules,
    add_margin_rules, add_padding_rules,
};
pub use parser::{
    Declaration, DeclarationError, ParsedDeclarations, parse_declarations,
    parse_declarations_with_diagnostics,
};
pub use processor::{Normalized, StyleFamily, StylesProcessor};
pub use styles_map::StylesMap;
pub use tree::{StylePath, StyleTree, StyleValue};
