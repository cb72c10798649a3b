//! Error types for constant resolution.

use constant_resolver_types::ConstValue;
use thiserror::Error;

/// Resolution errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The type identifier is not registered.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// The type exists but none of its constants equals the value.
    #[error("no constant on {type_name} found with value {value}")]
    NoMatchingConstant { type_name: String, value: ConstValue },

    /// An unrecognized return type was requested.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A value could not be converted for lookup.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Configuration JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<constant_resolver_types::Error> for ResolveError {
    fn from(err: constant_resolver_types::Error) -> Self {
        match err {
            constant_resolver_types::Error::TypeNotFound(name) => Self::TypeNotFound(name),
            err @ constant_resolver_types::Error::IntegerOutOfRange(_) => {
                Self::InvalidValue(err.to_string())
            }
        }
    }
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
