//! Registry of inspectable types, keyed by identifier.

use crate::{ConstantBinding, Constants, Error, Result};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::warn;

/// A registered type: its name, its [`TypeId`] and a function yielding its constants.
///
/// Two entries are equal when they describe the same Rust type, whatever
/// their names.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry {
    type_id: TypeId,
    type_name: &'static str,
    constants: fn() -> Vec<ConstantBinding>,
}

impl TypeEntry {
    /// Creates the entry for `T`.
    #[must_use]
    pub fn of<T: Constants>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: T::TYPE_NAME,
            constants: T::constants,
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns true if this entry describes `T`.
    #[must_use]
    pub fn is<T: Constants>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the type's own name, independent of the identifier it was found under.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the type's constants, declared first, then inherited.
    #[must_use]
    pub fn constants(&self) -> Vec<ConstantBinding> {
        (self.constants)()
    }
}

impl PartialEq for TypeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeEntry {}

/// Maps type identifiers to [`TypeEntry`]s.
///
/// A type may be registered under several identifiers (its own name plus
/// aliases such as a module path). Lookups are exact.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<(String, TypeEntry)>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<T: Constants>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Registers `T` under its own [`Constants::TYPE_NAME`].
    pub fn register<T: Constants>(&mut self) -> &mut Self {
        self.insert(T::TYPE_NAME.to_owned(), TypeEntry::of::<T>())
    }

    /// Registers `T` under an additional identifier.
    pub fn register_as<T: Constants>(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.insert(identifier.into(), TypeEntry::of::<T>())
    }

    fn insert(&mut self, identifier: String, entry: TypeEntry) -> &mut Self {
        if let Some(&i) = self.index.get(&identifier) {
            warn!(
                identifier = %identifier,
                previous = self.entries[i].1.type_name,
                replacement = entry.type_name,
                "replacing registered type"
            );
            self.entries[i].1 = entry;
        } else {
            self.index.insert(identifier.clone(), self.entries.len());
            self.entries.push((identifier, entry));
        }
        self
    }

    /// Looks up a type by identifier.
    pub fn lookup(&self, identifier: &str) -> Result<&TypeEntry> {
        self.index
            .get(identifier)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| Error::TypeNotFound(identifier.to_owned()))
    }

    /// Returns true if `identifier` is registered.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Returns the registered identifiers in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
