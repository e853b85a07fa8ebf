//! Tokenizing dotted completion input into a segment path.

use crate::symbol::unmangle;

/// Path delimiter between a symbol and its attributes.
pub const SEPARATOR: char = '.';

/// A dotted input split into segments.
///
/// Every segment except the last names a step of the attribute walk;
/// the last segment is the (possibly empty) prefix being completed.
/// A path always holds at least one segment: tokenizing `""` yields a
/// single empty segment, and a trailing separator yields a trailing
/// empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPath {
    segments: Vec<String>,
}

impl SymbolPath {
    /// Tokenize raw input. Any string is valid; there is no error case.
    pub fn parse(input: &str) -> Self {
        SymbolPath {
            segments: input.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The trailing segment to complete against candidate names.
    pub fn prefix(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The segments to resolve before completion, i.e. all but the last.
    pub fn walk_segments(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// True when the input references an attribute chain.
    pub fn has_attr(&self) -> bool {
        self.segments.len() > 1
    }

    /// The resolved part of the path as a display (unmangled) string.
    pub fn display_prefix(&self) -> String {
        self.walk_segments()
            .iter()
            .map(|s| unmangle(s))
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }

    /// The whole path as a display (unmangled) string.
    pub fn display(&self) -> String {
        self.segments
            .iter()
            .map(|s| unmangle(s))
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }

    /// Attach a completed name to the resolved part of the path.
    ///
    /// Completing `"print."` with `__call__` yields `"print.__call__"`;
    /// at the root the candidate is returned bare.
    pub fn attach(&self, completion: &str) -> String {
        let head = self.display_prefix();
        if head.is_empty() {
            completion.to_string()
        } else {
            format!("{}{}{}", head, SEPARATOR, completion)
        }
    }
}
