//! Constant declaration and type registry for the constant resolver.
//!
//! Rust has no runtime reflection over associated constants, so types opt in
//! to being inspected:
//! - [`Constants`] exposes a type's named constant bindings in declaration order
//! - [`constants!`] declares associated constants and implements [`Constants`] in one go
//! - [`TypeRegistry`] maps type identifiers to their constant tables
//! - [`ConstValue`] is the strictly typed value a binding holds
//!
//! Resolution itself (matching a value and formatting labels) lives in the
//! `constant-resolver` crate.

mod binding;
mod constants;
mod registry;
mod target;
mod value;

pub use binding::ConstantBinding;
pub use constants::Constants;
pub use registry::{TypeEntry, TypeRegistry};
pub use target::TypeTarget;
pub use value::ConstValue;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when looking up types or building values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("type not found: {0}")]
    TypeNotFound(String),

    #[error("integer out of range for a constant value: {0}")]
    IntegerOutOfRange(String),
}
