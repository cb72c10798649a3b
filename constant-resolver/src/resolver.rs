//! Constant resolution: the stateless core and the configured resolver.

use crate::config::Shape;
use crate::{DEFAULT_SEPARATOR, ResolveError, ResolverConfig, Resolution, Result, ReturnType};
use constant_resolver_types::{ConstValue, Constants, TypeEntry, TypeRegistry, TypeTarget};
use tracing::debug;

/// Resolves `value` against the constants of the type registered as `type_identifier`.
///
/// Labels are built from `type_identifier` as given, so an alias stays an
/// alias in the output. Matches keep declaration order. Fails with
/// [`ResolveError::TypeNotFound`] for an unregistered identifier,
/// [`ResolveError::InvalidConfiguration`] for an unrecognized return type
/// (whether or not anything would match) and
/// [`ResolveError::NoMatchingConstant`] when nothing equals `value`.
pub fn resolve_static(
    registry: &TypeRegistry,
    type_identifier: &str,
    value: impl Into<ConstValue>,
    return_type: &ReturnType,
    separator: &str,
) -> Result<Resolution> {
    let entry = registry.lookup(type_identifier)?;
    resolve_entry(entry, type_identifier, value.into(), return_type, separator)
}

/// [`resolve_static`] with [`ReturnType::JOINED`] and [`DEFAULT_SEPARATOR`].
pub fn resolve(
    registry: &TypeRegistry,
    type_identifier: &str,
    value: impl Into<ConstValue>,
) -> Result<String> {
    resolve_with_separator(registry, type_identifier, value, DEFAULT_SEPARATOR)
}

/// Joined-string resolution with a custom separator.
///
/// Shorthand for [`resolve_static`] with [`ReturnType::JOINED`].
pub fn resolve_with_separator(
    registry: &TypeRegistry,
    type_identifier: &str,
    value: impl Into<ConstValue>,
    separator: &str,
) -> Result<String> {
    let resolution = resolve_static(
        registry,
        type_identifier,
        value,
        &ReturnType::JOINED,
        separator,
    )?;
    Ok(resolution.to_string())
}

fn resolve_entry(
    entry: &TypeEntry,
    type_identifier: &str,
    value: ConstValue,
    return_type: &ReturnType,
    separator: &str,
) -> Result<Resolution> {
    let shape = return_type.shape()?;

    // A flipped value → name map would drop constants that share a value.
    let matches: Vec<_> = entry
        .constants()
        .into_iter()
        .filter(|binding| binding.matches(&value))
        .collect();

    debug!(
        type_name = type_identifier,
        matches = matches.len(),
        return_type = return_type.as_str(),
        "resolved constant value"
    );

    if matches.is_empty() {
        return Err(ResolveError::NoMatchingConstant {
            type_name: type_identifier.to_owned(),
            value,
        });
    }

    Ok(match shape {
        Shape::Joined => Resolution::Joined(
            matches
                .iter()
                .map(|binding| binding.qualified(type_identifier))
                .collect::<Vec<_>>()
                .join(separator),
        ),
        Shape::Mapping => Resolution::Mapping(
            matches
                .iter()
                .map(|binding| {
                    (
                        binding.name().to_owned(),
                        binding.qualified(type_identifier),
                    )
                })
                .collect(),
        ),
    })
}

/// A resolver bound to one type and one output preference.
///
/// Construction never fails. A resolver bound by name looks the type up when
/// resolving; one bound to an instance uses that instance's own type.
#[derive(Debug, Clone)]
pub struct ConstantResolver<'r> {
    registry: &'r TypeRegistry,
    config: ResolverConfig,
    bound: Option<TypeEntry>,
}

impl<'r> ConstantResolver<'r> {
    /// Binds a resolver to a type identifier or an instance's type.
    pub fn new(registry: &'r TypeRegistry, target: impl Into<TypeTarget>) -> Self {
        let target = target.into();
        let mut resolver = Self::from_config(registry, ResolverConfig::new(target.identifier()));
        resolver.bound = target.entry().copied();
        resolver
    }

    /// Binds a resolver to the type of `instance`.
    pub fn for_instance<T: Constants>(registry: &'r TypeRegistry, instance: &T) -> Self {
        Self::new(registry, TypeTarget::instance(instance))
    }

    /// Binds a resolver by name with the given return type and separator.
    pub fn from_config(registry: &'r TypeRegistry, config: ResolverConfig) -> Self {
        Self {
            registry,
            config,
            bound: None,
        }
    }

    /// Returns the identifier the resolver is bound to.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.config.type_name
    }

    /// Returns the configured output shape.
    #[must_use]
    pub fn return_type(&self) -> &ReturnType {
        &self.config.return_type
    }

    /// Returns the separator used for joined output.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    /// Returns the full configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Sets the output shape. Not validated until [`resolve`](Self::resolve).
    pub fn set_return_type(&mut self, return_type: ReturnType) -> &mut Self {
        self.config.return_type = return_type;
        self
    }

    /// Builder form of [`set_return_type`](Self::set_return_type).
    #[must_use]
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.set_return_type(return_type);
        self
    }

    /// Sets the separator for joined output.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.config.separator = separator.into();
        self
    }

    /// Builder form of [`set_separator`](Self::set_separator).
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    /// Resolves `value` using the bound type and configuration.
    pub fn resolve(&self, value: impl Into<ConstValue>) -> Result<Resolution> {
        match &self.bound {
            Some(entry) => resolve_entry(
                entry,
                &self.config.type_name,
                value.into(),
                &self.config.return_type,
                &self.config.separator,
            ),
            None => resolve_static(
                self.registry,
                &self.config.type_name,
                value,
                &self.config.return_type,
                &self.config.separator,
            ),
        }
    }
}
