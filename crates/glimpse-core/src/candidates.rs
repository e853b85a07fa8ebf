//! Turning a resolved container into an ordered candidate list.

use crate::namespace::Namespace;
use crate::path::SymbolPath;
use crate::resolver::Container;
use crate::symbol::unmangle;

/// Enumerate, filter, deduplicate and order completion candidates.
///
/// The pool comes from the snapshot at the root (bindings plus macros)
/// or from the resolved object's attribute names. Matching is exact
/// case-sensitive starts-with on the unmangled prefix. Output is
/// sorted ascending; the sort is stable, so pool insertion order
/// breaks ties, and repeated calls against the same snapshot return
/// identical sequences. Each candidate is rendered as the full dotted
/// display path.
pub fn generate(container: &Container, path: &SymbolPath, namespace: &Namespace) -> Vec<String> {
    let pool = match container {
        Container::Root => namespace.names(),
        Container::Object(object) => match object.attr_names() {
            Some(names) => dedup_preserving_order(names.iter().map(|n| unmangle(n))),
            // Opaque object: nothing to offer.
            None => return Vec::new(),
        },
    };

    let prefix = unmangle(path.prefix());
    let mut matches: Vec<String> = pool
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect();
    matches.sort();
    matches.dedup();

    matches.into_iter().map(|name| path.attach(&name)).collect()
}

fn dedup_preserving_order(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names.filter(|name| seen.insert(name.clone())).collect()
}
