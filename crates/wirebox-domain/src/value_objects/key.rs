//! Resolution stack keys

use std::fmt;

/// Key of an in-flight resolution.
///
/// Identifier-based and type-based resolutions share one stack; the tag keeps
/// an identifier and an identically named type from colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolutionKey {
    /// Resolution through a registered definition
    Identifier(String),
    /// Construction of a type from its class descriptor
    TypeName(String),
}

impl ResolutionKey {
    /// The identifier or type name
    pub fn name(&self) -> &str {
        match self {
            Self::Identifier(name) | Self::TypeName(name) => name,
        }
    }

    /// The identifier, if this is an identifier key
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::TypeName(_) => None,
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::TypeName(name) => write!(f, "new {name}"),
        }
    }
}
