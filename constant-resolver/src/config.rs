//! Resolver configuration: target type, output shape, separator.

use crate::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Separator between labels in joined output when none is configured.
pub const DEFAULT_SEPARATOR: &str = " or ";

/// The requested output shape, by name.
///
/// Any name can be stored; only [`ReturnType::JOINED`] and
/// [`ReturnType::MAPPING`] are understood. An unknown name is reported as
/// [`ResolveError::InvalidConfiguration`] when a resolve is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnType(Cow<'static, str>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Joined,
    Mapping,
}

impl ReturnType {
    /// Labels joined into one string by the separator.
    pub const JOINED: Self = Self(Cow::Borrowed("joined-string"));

    /// A constant name → label mapping.
    pub const MAPPING: Self = Self(Cow::Borrowed("structured-mapping"));

    /// Creates a return type from its name.
    pub fn named(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is a return type the resolver understands.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.shape().is_ok()
    }

    pub(crate) fn shape(&self) -> Result<Shape> {
        match self.as_str() {
            "joined-string" => Ok(Shape::Joined),
            "structured-mapping" => Ok(Shape::Mapping),
            other => Err(ResolveError::InvalidConfiguration(format!(
                "unknown return type {other:?}"
            ))),
        }
    }
}

impl Default for ReturnType {
    fn default() -> Self {
        Self::JOINED
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_owned()
}

/// Everything a [`ConstantResolver`](crate::ConstantResolver) needs besides the registry.
///
/// ```json
/// {"type_name": "HttpStatus", "return_type": "structured-mapping"}
/// ```
///
/// `return_type` defaults to `"joined-string"` and `separator` to `" or "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Identifier of the type to resolve against, as it should appear in labels.
    pub type_name: String,
    /// Output shape; unknown names fail at resolve time.
    #[serde(default)]
    pub return_type: ReturnType,
    /// Only used for joined output.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl ResolverConfig {
    /// Creates a config with the default return type and separator.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            return_type: ReturnType::default(),
            separator: default_separator(),
        }
    }

    /// Replaces the return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Replaces the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
