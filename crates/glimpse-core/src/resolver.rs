//! Walking a tokenized path against a namespace snapshot.

use std::sync::Arc;

use crate::error::ResolveError;
use crate::namespace::Namespace;
use crate::path::SymbolPath;
use crate::reflect::ObjectRef;
use crate::symbol::{mangle, unmangle};

/// Where the candidate generator should look for names.
pub enum Container {
    /// The snapshot itself; includes macro names.
    Root,
    /// Attributes of a resolved object; macros are never re-consulted.
    Object(ObjectRef),
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Root => f.write_str("Root"),
            Container::Object(obj) => f.debug_tuple("Object").field(&obj.kind()).finish(),
        }
    }
}

/// A fully resolved dotted name, for `docs` / `annotate`.
pub struct ResolvedSymbol {
    pub object: ObjectRef,
    /// True when the name came from the macro table rather than an
    /// ordinary binding. Only a bare root name can set this.
    pub via_macro: bool,
}

impl std::fmt::Debug for ResolvedSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSymbol")
            .field("object", &self.object.kind())
            .field("via_macro", &self.via_macro)
            .finish()
    }
}

/// Resolve everything before the trailing prefix.
///
/// A single-segment path needs no walking at all: the container is the
/// snapshot and this cannot fail. Longer paths resolve the first
/// segment against bindings, then macros, and each further non-final
/// segment as an attribute of the previous object.
pub fn resolve_prefix(path: &SymbolPath, namespace: &Namespace) -> Result<Container, ResolveError> {
    let segments = path.walk_segments();
    if segments.is_empty() {
        return Ok(Container::Root);
    }

    let (mut current, _) = lookup_root(namespace, &segments[0])?;
    for (offset, segment) in segments[1..].iter().enumerate() {
        current = attribute_step(&current, segment, offset + 1)?;
    }
    Ok(Container::Object(current))
}

/// Resolve a complete dotted name, final segment included.
pub fn resolve_full(
    path: &SymbolPath,
    namespace: &Namespace,
) -> Result<ResolvedSymbol, ResolveError> {
    let segments = path.segments();

    let (mut current, from_macro) = lookup_root(namespace, &segments[0])?;
    for (offset, segment) in segments[1..].iter().enumerate() {
        current = attribute_step(&current, segment, offset + 1)?;
    }

    Ok(ResolvedSymbol {
        object: current,
        via_macro: from_macro && segments.len() == 1,
    })
}

/// Root lookup: ordinary bindings first, macro table second.
fn lookup_root(namespace: &Namespace, segment: &str) -> Result<(ObjectRef, bool), ResolveError> {
    if let Some(object) = namespace.binding(segment) {
        Ok((Arc::clone(object), false))
    } else if let Some(object) = namespace.macro_binding(segment) {
        Ok((Arc::clone(object), true))
    } else {
        Err(ResolveError::UnknownRoot(unmangle(segment)))
    }
}

/// One attribute step, trying the exact spelling then the mangled one.
fn attribute_step(
    current: &ObjectRef,
    segment: &str,
    index: usize,
) -> Result<ObjectRef, ResolveError> {
    if current.attr_names().is_none() {
        return Err(ResolveError::NotIntrospectable {
            name: unmangle(segment),
            segment: index,
        });
    }

    current
        .attr(segment)
        .or_else(|| current.attr(&mangle(segment)))
        .ok_or_else(|| ResolveError::AttributeNotFound {
            name: unmangle(segment),
            segment: index,
        })
}
