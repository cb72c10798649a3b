//! Maps a type's constant values back to their qualified names.
//!
//! Turns an opaque value such as `404` into a self-describing label such as
//! `HttpStatus::NOT_FOUND`, for logs and debug output.
//!
//! - [`resolve_static`] — one-off lookup against a [`TypeRegistry`]
//! - [`ConstantResolver`] — a reusable resolver bound to one type and one output preference
//! - [`ReturnType`] — joined string or structured name → label mapping
//!
//! Matching is strict (no cross-kind coercion) and all-or-nothing: a value
//! that matches no constant is an error, never an empty result. When several
//! constants share a value they come back in declaration order.
//!
//! # Example
//!
//! ```
//! use constant_resolver::{constants, ConstantResolver, ReturnType, TypeRegistry};
//!
//! pub struct HttpStatus;
//!
//! constants! {
//!     HttpStatus {
//!         OK: u16 = 200,
//!         NOT_FOUND: u16 = 404,
//!         GONE_FOR_NOW: u16 = 404,
//!     }
//! }
//!
//! let registry = TypeRegistry::new().with::<HttpStatus>();
//! let resolver = ConstantResolver::new(&registry, "HttpStatus");
//! assert_eq!(
//!     resolver.resolve(404u16).unwrap().to_string(),
//!     "HttpStatus::NOT_FOUND or HttpStatus::GONE_FOR_NOW"
//! );
//!
//! let mapping = resolver
//!     .with_return_type(ReturnType::MAPPING)
//!     .resolve(200u16)
//!     .unwrap();
//! assert_eq!(mapping.as_mapping().unwrap().get("OK"), Some("HttpStatus::OK"));
//! ```

mod config;
mod error;
mod resolution;
mod resolver;

pub use config::{DEFAULT_SEPARATOR, ResolverConfig, ReturnType};
pub use error::{ResolveError, Result};
pub use resolution::{LabelMap, Resolution};
pub use resolver::{ConstantResolver, resolve, resolve_static, resolve_with_separator};

pub use constant_resolver_types::{
    ConstValue, ConstantBinding, Constants, TypeEntry, TypeRegistry, TypeTarget, constants,
};
