//! Immutable namespace snapshots.

use std::collections::HashMap;

use crate::reflect::ObjectRef;
use crate::symbol::{mangle, unmangle};

/// A point-in-time view of the host runtime's bindings.
///
/// Two tables: ordinary bindings keyed by host identifier, and macro
/// bindings keyed by their unmangled lispy name. Macros are only ever
/// consulted at the root of a path. A snapshot never changes after
/// construction; the facade replaces it wholesale.
pub struct Namespace {
    bindings: Vec<(String, ObjectRef)>,
    macros: Vec<(String, ObjectRef)>,
    binding_index: HashMap<String, usize>,
    macro_index: HashMap<String, usize>,
}

impl Namespace {
    /// The snapshot used before any `set_namespace` call.
    pub fn empty() -> Self {
        Namespace::new(Vec::new(), Vec::new())
    }

    /// Build a snapshot from binding and macro tables.
    ///
    /// Insertion order is preserved; it is the tie-break order for
    /// candidate generation. Macro keys are unmangled up front, the
    /// same way the reader hands them back to the user.
    pub fn new(bindings: Vec<(String, ObjectRef)>, macros: Vec<(String, ObjectRef)>) -> Self {
        let macros: Vec<(String, ObjectRef)> = macros
            .into_iter()
            .map(|(name, value)| (unmangle(&name), value))
            .collect();

        let binding_index = bindings
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        let macro_index = macros
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();

        Namespace {
            bindings,
            macros,
            binding_index,
            macro_index,
        }
    }

    /// Look up an ordinary binding, trying the exact spelling first and
    /// the mangled spelling second.
    pub fn binding(&self, name: &str) -> Option<&ObjectRef> {
        self.binding_index
            .get(name)
            .or_else(|| self.binding_index.get(&mangle(name)))
            .map(|&i| &self.bindings[i].1)
    }

    /// Look up a macro by its lispy name.
    pub fn macro_binding(&self, name: &str) -> Option<&ObjectRef> {
        self.macro_index
            .get(&unmangle(name))
            .map(|&i| &self.macros[i].1)
    }

    /// All visible root names, unmangled, bindings before macros,
    /// deduplicated keeping the first occurrence.
    pub fn names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.bindings
            .iter()
            .chain(self.macros.iter())
            .map(|(name, _)| unmangle(name))
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.macros.is_empty()
    }
}
