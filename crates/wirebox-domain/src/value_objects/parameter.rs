//! Parameter descriptors
//!
//! A [`Parameter`] carries everything the binder needs to know about one slot
//! of a callable or constructor: its position and name, its declared type,
//! an optional default and an optional explicit identifier to inject.

use std::fmt;

use crate::constants::BUILTIN_TYPE_NAMES;
use crate::value_objects::value::Value;

/// Declared type of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Primitive or standard type; gives the container nothing to resolve against
    Builtin(String),
    /// Any other type name; doubles as a container identifier
    Named(String),
}

impl DeclaredType {
    /// Classify a type name
    pub fn parse(type_name: &str) -> Self {
        if BUILTIN_TYPE_NAMES.contains(&type_name) {
            Self::Builtin(type_name.to_string())
        } else {
            Self::Named(type_name.to_string())
        }
    }

    /// The type name as written
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(name) | Self::Named(name) => name,
        }
    }

    /// Whether this is a built-in type
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor of a single callable or constructor parameter
#[derive(Clone)]
pub struct Parameter {
    position: usize,
    name: String,
    declared_type: Option<DeclaredType>,
    default: Option<Value>,
    inject: Option<String>,
}

impl Parameter {
    /// Create an untyped, required parameter
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            position: 0,
            name: name.into(),
            declared_type: None,
            default: None,
            inject: None,
        }
    }

    /// Shorthand for `Parameter::new(name).typed(type_name)`
    pub fn typed_as<N: Into<String>>(name: N, type_name: &str) -> Self {
        Self::new(name).typed(type_name)
    }

    /// Set the declared type
    pub fn typed(mut self, type_name: &str) -> Self {
        self.declared_type = Some(DeclaredType::parse(type_name));
        self
    }

    /// Make the parameter optional with a default value
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Resolve this parameter from an explicit container identifier
    pub fn inject<S: Into<String>>(mut self, identifier: S) -> Self {
        self.inject = Some(identifier.into());
        self
    }

    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Zero-based position in the parameter list
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, if any
    pub fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    /// Whether a default value is available
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    /// Default value, if any
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Explicit identifier to inject, if any
    pub fn injected_identifier(&self) -> Option<&str> {
        self.inject.as_deref()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("position", &self.position)
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("optional", &self.is_optional())
            .field("inject", &self.inject)
            .finish()
    }
}
