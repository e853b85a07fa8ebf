//! A simple dynamic object model satisfying the engine's reflection trait.

use std::sync::Arc;

use glimpse_core::{unmangle, ObjectKind, ObjectRef, Reflect};

use crate::signature::Signature;

/// A host runtime object: a module, class, function, or instance with
/// named attributes and an optional doc string.
pub struct HostObject {
    name: String,
    kind: ObjectKind,
    doc: Option<String>,
    signature: Option<Signature>,
    attrs: Vec<(String, ObjectRef)>,
}

impl HostObject {
    pub fn module(name: &str) -> Self {
        HostObject::new(name, ObjectKind::Module)
    }

    pub fn class(name: &str) -> Self {
        HostObject::new(name, ObjectKind::Class)
    }

    pub fn function(name: &str) -> Self {
        HostObject::new(name, ObjectKind::Function)
    }

    pub fn instance(name: &str) -> Self {
        HostObject::new(name, ObjectKind::Instance)
    }

    fn new(name: &str, kind: ObjectKind) -> Self {
        HostObject {
            name: name.to_string(),
            kind,
            doc: None,
            signature: None,
            attrs: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn with_attr(mut self, name: &str, value: ObjectRef) -> Self {
        self.attrs.push((name.to_string(), value));
        self
    }

    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }

    fn doc_first_line(&self) -> Option<&str> {
        self.doc.as_deref().and_then(|d| d.lines().next())
    }

    fn doc_rest_lines(&self) -> Option<String> {
        let doc = self.doc.as_deref()?;
        let rest: Vec<&str> = doc.lines().skip(1).collect();
        if rest.iter().all(|line| line.trim().is_empty()) {
            None
        } else {
            Some(rest.join("\n"))
        }
    }
}

impl Reflect for HostObject {
    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn attr(&self, name: &str) -> Option<ObjectRef> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| Arc::clone(value))
    }

    fn attr_names(&self) -> Option<Vec<String>> {
        Some(self.attrs.iter().map(|(name, _)| name.clone()).collect())
    }

    /// Summary line: `name: (signature) - first doc line`.
    ///
    /// Callables without a doc string omit the ` - …` tail; objects
    /// with neither signature nor doc have no documentation at all.
    fn docs(&self) -> Option<String> {
        match (&self.signature, self.doc_first_line()) {
            (Some(signature), Some(first)) => Some(format!(
                "{}: ({}) - {}",
                unmangle(&self.name),
                signature,
                first
            )),
            (Some(signature), None) => {
                Some(format!("{}: ({})", unmangle(&self.name), signature))
            }
            (None, Some(first)) => Some(first.to_string()),
            (None, None) => None,
        }
    }

    fn full_docs(&self) -> Option<String> {
        let summary = self.docs()?;
        match self.doc_rest_lines() {
            Some(rest) => Some(format!("{}\n\n{}", summary, rest)),
            None => Some(summary),
        }
    }
}

/// An object that refuses introspection entirely.
///
/// Stands in for foreign values the reflector cannot see into; the
/// engine reports these as not-introspectable rather than guessing.
pub struct Opaque;

impl Opaque {
    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }
}

impl Reflect for Opaque {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Instance
    }

    fn attr(&self, _name: &str) -> Option<ObjectRef> {
        None
    }

    fn attr_names(&self) -> Option<Vec<String>> {
        None
    }

    fn docs(&self) -> Option<String> {
        None
    }
}
