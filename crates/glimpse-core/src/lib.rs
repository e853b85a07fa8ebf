//! Completion and introspection engine for lisp-flavored host runtimes
//!
//! Resolves a partially typed dotted symbol (`"pr"`, `"print."`,
//! `"itertools.chain."`) against a live namespace snapshot and produces
//! ordered completion candidates, documentation, and kind annotations.
//!
//! The engine owns the resolution and ranking logic only. How a host
//! populates the namespace and how a resolved object answers attribute
//! and documentation questions is abstracted behind the [`Reflect`]
//! trait; any object model that implements it can be completed against.
//!
//! # Example
//!
//! ```
//! use glimpse_core::Api;
//!
//! let api = Api::new();
//! // No namespace set yet: root completion is empty, not an error.
//! assert!(api.complete("pr").is_empty());
//! ```

pub mod api;
pub mod candidates;
pub mod error;
pub mod namespace;
pub mod path;
pub mod reflect;
pub mod resolver;
pub mod symbol;

// Re-export the public surface for convenience
pub use api::{Api, NO_DOCS};
pub use error::ResolveError;
pub use namespace::Namespace;
pub use path::{SymbolPath, SEPARATOR};
pub use reflect::{ObjectKind, ObjectRef, Reflect};
pub use symbol::{mangle, unmangle};
