//! The public facade: `set_namespace`, `complete`, `docs`, `annotate`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::candidates::generate;
use crate::error::ResolveError;
use crate::namespace::Namespace;
use crate::path::SymbolPath;
use crate::reflect::ObjectRef;
use crate::resolver::{resolve_full, resolve_prefix, ResolvedSymbol};

/// Sentinel returned by `docs` for resolvable names with no docs.
pub const NO_DOCS: &str = "No documentation available.";

static GLOBAL: Lazy<Api> = Lazy::new(Api::new);

/// Completion and introspection over a single live namespace snapshot.
///
/// The snapshot is held behind an `RwLock<Arc<..>>`: readers clone the
/// `Arc` once and run the whole request against that snapshot, while
/// `set_namespace` swaps the pointer wholesale. A request therefore
/// resolves entirely against one snapshot or entirely against the
/// next, never a torn mix.
pub struct Api {
    namespace: RwLock<Arc<Namespace>>,
}

impl Api {
    /// A facade over an empty namespace.
    pub fn new() -> Self {
        Api {
            namespace: RwLock::new(Arc::new(Namespace::empty())),
        }
    }

    /// The process-wide facade instance.
    pub fn global() -> &'static Api {
        &GLOBAL
    }

    /// Replace the current snapshot.
    ///
    /// Bindings are ordinary symbols; macros are a separate root-only
    /// table. Prior state is discarded entirely.
    pub fn set_namespace(
        &self,
        bindings: Vec<(String, ObjectRef)>,
        macros: Vec<(String, ObjectRef)>,
    ) {
        let snapshot = Arc::new(Namespace::new(bindings, macros));
        *self.namespace.write() = snapshot;
    }

    /// The snapshot a request should run against.
    pub fn snapshot(&self) -> Arc<Namespace> {
        Arc::clone(&self.namespace.read())
    }

    /// Ordered completion candidates for a partially typed input.
    ///
    /// Never fails: any resolution failure along the path simply means
    /// there is nothing to offer.
    pub fn complete(&self, text: &str) -> Vec<String> {
        let snapshot = self.snapshot();
        let path = SymbolPath::parse(text);
        match resolve_prefix(&path, &snapshot) {
            Ok(container) => generate(&container, &path, &snapshot),
            Err(_) => Vec::new(),
        }
    }

    /// Summary documentation for a fully named symbol.
    pub fn docs(&self, name: &str) -> Result<String, ResolveError> {
        let resolved = self.resolve(name)?;
        Ok(resolved.object.docs().unwrap_or_else(|| NO_DOCS.to_string()))
    }

    /// Full documentation body for a fully named symbol.
    pub fn full_docs(&self, name: &str) -> Result<String, ResolveError> {
        let resolved = self.resolve(name)?;
        Ok(resolved
            .object
            .full_docs()
            .unwrap_or_else(|| NO_DOCS.to_string()))
    }

    /// Kind annotation for a fully named symbol, e.g. `<module itertools>`.
    ///
    /// A bare root name that resolved from the macro table annotates as
    /// a macro regardless of what kind of object backs it.
    pub fn annotate(&self, name: &str) -> Result<String, ResolveError> {
        let path = SymbolPath::parse(name);
        let resolved = resolve_full(&path, &self.snapshot())?;
        let kind = if resolved.via_macro {
            "macro"
        } else {
            resolved.object.kind().as_str()
        };
        Ok(format!("<{} {}>", kind, path.display()))
    }

    fn resolve(&self, name: &str) -> Result<ResolvedSymbol, ResolveError> {
        let path = SymbolPath::parse(name);
        resolve_full(&path, &self.snapshot())
    }
}

impl Default for Api {
    fn default() -> Self {
        Api::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn test_empty_facade_completes_to_nothing() {
        let api = Api::new();
        assert!(api.complete("").is_empty());
        assert!(api.complete("anything").is_empty());
    }

    #[test]
    fn test_empty_facade_attribute_paths_fail_unknown_root() {
        let api = Api::new();
        assert!(api.complete("anything.attr").is_empty());
        assert_eq!(
            api.docs("anything").unwrap_err(),
            ResolveError::UnknownRoot("anything".to_string())
        );
    }
}
