//! Dynamic object model for the glimpse engine
//!
//! A concrete implementation of the engine's [`Reflect`] capability:
//! modules, classes, functions, and instances with named attributes,
//! doc strings, and lispy signature rendering. Hosts with their own
//! object model implement [`Reflect`] directly instead; this crate
//! exists for embedders that want something ready-made, and for the
//! engine's integration tests.
//!
//! [`Reflect`]: glimpse_core::Reflect

pub mod object;
pub mod signature;

pub use object::{HostObject, Opaque};
pub use signature::{Parameter, Signature};
