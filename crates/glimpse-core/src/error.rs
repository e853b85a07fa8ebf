//! Resolution error taxonomy.

use thiserror::Error;

/// Why a dotted path failed to resolve against the current namespace.
///
/// `complete` swallows these (a broken path simply has no candidates);
/// `docs` and `annotate` surface them, since callers must be able to
/// tell "no documentation" apart from "no such name".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The first segment names neither a binding nor a macro.
    #[error("unknown symbol `{0}`")]
    UnknownRoot(String),

    /// A walked object has no attribute with this name.
    #[error("no attribute `{name}` at segment {segment}")]
    AttributeNotFound { name: String, segment: usize },

    /// The object at this step refuses attribute introspection.
    #[error("cannot introspect attributes of `{name}` at segment {segment}")]
    NotIntrospectable { name: String, segment: usize },
}

impl ResolveError {
    /// Index of the path segment the walk failed at.
    pub fn segment(&self) -> usize {
        match self {
            ResolveError::UnknownRoot(_) => 0,
            ResolveError::AttributeNotFound { segment, .. } => *segment,
            ResolveError::NotIntrospectable { segment, .. } => *segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ResolveError::UnknownRoot("zzz".to_string());
        assert_eq!(err.to_string(), "unknown symbol `zzz`");
        assert_eq!(err.segment(), 0);

        let err = ResolveError::AttributeNotFound {
            name: "tee".to_string(),
            segment: 2,
        };
        assert_eq!(err.to_string(), "no attribute `tee` at segment 2");
        assert_eq!(err.segment(), 2);
    }
}
