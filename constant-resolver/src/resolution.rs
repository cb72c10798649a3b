//! Resolution output: a joined string or an ordered name → label map.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;

/// Constant name → qualified label, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
}

impl LabelMap {
    /// Returns the label for a constant name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, label)| label.as_str())
    }

    /// Constant names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Qualified labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LabelMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for LabelMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, label) in &self.entries {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

/// The result of resolving a value against a type's constants.
///
/// Never empty: a value with no matching constant is an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolution {
    /// Labels joined by the configured separator.
    Joined(String),
    /// Constant name → label.
    Mapping(LabelMap),
}

impl Resolution {
    #[must_use]
    pub fn as_joined(&self) -> Option<&str> {
        match self {
            Self::Joined(s) => Some(s),
            Self::Mapping(_) => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&LabelMap> {
        match self {
            Self::Joined(_) => None,
            Self::Mapping(map) => Some(map),
        }
    }

    #[must_use]
    pub fn into_joined(self) -> Option<String> {
        match self {
            Self::Joined(s) => Some(s),
            Self::Mapping(_) => None,
        }
    }

    #[must_use]
    pub fn into_mapping(self) -> Option<LabelMap> {
        match self {
            Self::Joined(_) => None,
            Self::Mapping(map) => Some(map),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined(s) => f.write_str(s),
            Self::Mapping(map) => {
                for (i, label) in map.labels().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(label)?;
                }
                Ok(())
            }
        }
    }
}
