//! Symbol mangling between the lisp surface syntax and host identifiers.
//!
//! The lisp reader spells symbols with hyphens (`take-while`) while the
//! host runtime stores them with underscores (`take_while`). Dunder-style
//! names keep their leading and trailing underscore runs untouched, so
//! `__call__` survives a round trip unchanged.

/// Convert a lispy symbol to a host identifier.
pub fn mangle(symbol: &str) -> String {
    symbol.replace('-', "_")
}

/// Convert a host identifier to a lispy symbol.
///
/// Interior underscores become hyphens; leading and trailing underscore
/// runs are preserved. All-underscore names are returned as-is.
pub fn unmangle(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    let leading = identifier.len() - identifier.trim_start_matches('_').len();
    let trailing = identifier.len() - identifier.trim_end_matches('_').len();

    if leading + trailing >= identifier.len() {
        return identifier.to_string();
    }

    let middle = &identifier[leading..identifier.len() - trailing];
    format!(
        "{}{}{}",
        "_".repeat(leading),
        middle.replace('_', "-"),
        "_".repeat(trailing)
    )
}
