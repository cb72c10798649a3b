//! What a resolver is bound to: a type identifier, or the type of an instance.

use crate::{Constants, TypeEntry};
use std::fmt;

/// Either a type identifier or the type of a sample instance.
///
/// A name is only looked up when resolving, so an unknown name fails late.
/// An instance carries its own [`TypeEntry`] and never goes through a name
/// lookup, so types that share a name in different modules cannot be
/// confused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTarget {
    /// A type identifier exactly as the caller spelled it.
    Name(String),
    /// The type of an instance.
    Instance(TypeEntry),
}

impl TypeTarget {
    /// Targets the type of `instance`.
    #[must_use]
    pub fn instance<T: Constants>(_instance: &T) -> Self {
        Self::of::<T>()
    }

    /// Targets `T` directly, without needing an instance.
    #[must_use]
    pub fn of<T: Constants>() -> Self {
        Self::Instance(TypeEntry::of::<T>())
    }

    /// Returns the identifier used in labels.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Instance(entry) => entry.type_name(),
        }
    }

    /// Returns the entry of an instance target.
    #[must_use]
    pub fn entry(&self) -> Option<&TypeEntry> {
        match self {
            Self::Name(_) => None,
            Self::Instance(entry) => Some(entry),
        }
    }
}

impl From<&str> for TypeTarget {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for TypeTarget {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for TypeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
