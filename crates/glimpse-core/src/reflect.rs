//! The reflection capability the engine requires of resolvable objects.

use std::sync::Arc;

/// Shared handle to a runtime object.
pub type ObjectRef = Arc<dyn Reflect>;

/// What kind of thing an object is, for annotation rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Module,
    Class,
    Function,
    Instance,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Module => "module",
            ObjectKind::Class => "class",
            ObjectKind::Function => "function",
            ObjectKind::Instance => "instance",
        }
    }
}

/// Side-effect-free introspection over a runtime object.
///
/// The engine only ever asks these four questions; it never assumes a
/// specific object model. An opaque object (one that refuses attribute
/// enumeration) returns `None` from [`Reflect::attr_names`], and must
/// also return `None` from [`Reflect::attr`] — the resolver checks
/// opacity first, so failures on opaque objects are classified as
/// not-introspectable rather than missing-attribute.
pub trait Reflect: Send + Sync {
    /// The object's kind, rendered into annotations.
    fn kind(&self) -> ObjectKind;

    /// Exact attribute lookup by host identifier.
    fn attr(&self, name: &str) -> Option<ObjectRef>;

    /// Enumerable attribute names, or `None` when the object is opaque.
    fn attr_names(&self) -> Option<Vec<String>>;

    /// Summary documentation, if any.
    fn docs(&self) -> Option<String>;

    /// Full documentation body. Defaults to the summary.
    fn full_docs(&self) -> Option<String> {
        self.docs()
    }
}
