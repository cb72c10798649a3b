//! Named constant bindings.

use crate::ConstValue;
use serde::{Deserialize, Serialize};

/// A `(name, value)` pair declared on a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantBinding {
    name: String,
    value: ConstValue,
}

impl ConstantBinding {
    /// Creates a binding from a constant name and its value.
    pub fn new(name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the constant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constant's value.
    #[must_use]
    pub fn value(&self) -> &ConstValue {
        &self.value
    }

    /// Returns true if the binding holds exactly `value` (same kind and contents).
    #[must_use]
    pub fn matches(&self, value: &ConstValue) -> bool {
        self.value == *value
    }

    /// Formats the qualified label `"<type_identifier>::<NAME>"`.
    #[must_use]
    pub fn qualified(&self, type_identifier: &str) -> String {
        format!("{type_identifier}::{}", self.name)
    }
}
