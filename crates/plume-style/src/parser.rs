//! Declaration parser per [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/#syntax).
//!
//! "The value of the style attribute must match the syntax of the contents of
//! a CSS declaration block."
//!
//! This is a single left-to-right scan, not a full tokenizer: it only needs to
//! find declaration boundaries. Quoted runs are opaque, so `url("a;b:c")`
//! survives intact, and a missing final `;` is tolerated.

use std::fmt;

use plume_common::warning::warn_once;
use thiserror::Error;

/// [§ 2 Syntax](https://www.w3.org/TR/css-style-attr/#syntax)
///
/// One `name:value` unit. Also used for the flat declarations a style tree
/// reduces to on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// The property name, trimmed, case preserved.
    pub name: String,
    /// The raw value, trimmed. May contain spaces and quoted runs.
    pub value: String,
}

impl Declaration {
    /// Create a declaration from a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Canonical `name:value;` form, no extraneous whitespace.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.name, self.value)
    }
}

/// A recoverable problem found while scanning a style string.
///
/// None of these abort the scan; they describe what was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// An unquoted `:` with only whitespace before it. The colon does not
    /// split; the name region keeps growing.
    #[error("stray ':' at byte {offset} has no property name before it")]
    EmptyName {
        /// Byte offset of the colon.
        offset: usize,
    },
    /// A `;`-terminated chunk that never had a name/value separator.
    #[error("declaration '{text}' at byte {offset} has no ':' separator")]
    MissingColon {
        /// Byte offset where the chunk starts.
        offset: usize,
        /// The trimmed chunk text.
        text: String,
    },
    /// Input ended inside a quoted run; the trailing declaration is dropped.
    #[error("unterminated {quote} quote starting at byte {offset}")]
    UnterminatedQuote {
        /// The opening quote character.
        quote: char,
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

/// Result of a scan: the declarations found, in source order, and any
/// diagnostics about input that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeclarations {
    /// Declarations in source order. Duplicates are kept.
    pub declarations: Vec<Declaration>,
    /// Problems encountered, in source order.
    pub errors: Vec<DeclarationError>,
}

/// Scanner state for one style string.
struct DeclarationParser<'a> {
    input: &'a str,
    /// Open quote character and its byte offset.
    quote: Option<(char, usize)>,
    /// Start of the current declaration.
    start: usize,
    /// Name captured by the first unquoted colon of the current declaration.
    name: Option<&'a str>,
    value_start: usize,
    output: ParsedDeclarations,
}

impl<'a> DeclarationParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            quote: None,
            start: 0,
            name: None,
            value_start: 0,
            output: ParsedDeclarations::default(),
        }
    }

    fn run(mut self) -> ParsedDeclarations {
        let input = self.input;
        for (offset, character) in input.char_indices() {
            // Inside quotes only the matching quote character is significant.
            if let Some((open, _)) = self.quote {
                if character == open {
                    self.quote = None;
                }
                continue;
            }

            match character {
                '"' | '\'' => self.quote = Some((character, offset)),
                ':' if self.name.is_none() => self.capture_name(offset),
                ';' => {
                    self.finish_declaration(offset);
                    self.start = offset + 1;
                }
                _ => {}
            }
        }

        // The implicit trailing separator is swallowed by an open quote.
        if let Some((quote, offset)) = self.quote {
            self.output
                .errors
                .push(DeclarationError::UnterminatedQuote { quote, offset });
        } else {
            self.finish_declaration(input.len());
        }

        self.output
    }

    fn capture_name(&mut self, offset: usize) {
        let input = self.input;
        let name = input[self.start..offset].trim();
        if name.is_empty() {
            self.output
                .errors
                .push(DeclarationError::EmptyName { offset });
        } else {
            self.name = Some(name);
            self.value_start = offset + 1;
        }
    }

    fn finish_declaration(&mut self, end: usize) {
        let input = self.input;
        if let Some(name) = self.name.take() {
            let value = input[self.value_start..end].trim();
            self.output.declarations.push(Declaration::new(name, value));
        } else {
            let text = input[self.start..end].trim();
            if !text.is_empty() {
                self.output.errors.push(DeclarationError::MissingColon {
                    offset: self.start,
                    text: text.to_owned(),
                });
            }
        }
    }
}

/// Scan a style string into declarations and diagnostics.
///
/// Empty input yields an empty result. Never fails.
#[must_use]
pub fn parse_declarations_with_diagnostics(input: &str) -> ParsedDeclarations {
    DeclarationParser::new(input).run()
}

/// Scan a style string into declarations, reporting skipped input through
/// [`warn_once`].
#[must_use]
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    let parsed = parse_declarations_with_diagnostics(input);
    for error in &parsed.errors {
        warn_once("Style", &error.to_string());
    }
    parsed.declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_region_keeps_later_colons() {
        let parsed = parse_declarations_with_diagnostics("background:url(http://x/y.png)");
        assert_eq!(
            parsed.declarations,
            vec![Declaration::new("background", "url(http://x/y.png)")]
        );
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn test_separator_only_input() {
        let parsed = parse_declarations_with_diagnostics(" ; ;");
        assert!(parsed.declarations.is_empty());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Declaration::new("color", "red").to_string(), "color:red;");
    }
}
