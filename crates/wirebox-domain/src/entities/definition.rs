//! Dependency definitions

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::DependencyResolver;
use crate::value_objects::{Lifetime, Value};

/// Produces a definition's value.
///
/// Receives the resolving container and any explicitly supplied parameters.
pub type Factory =
    Arc<dyn Fn(&mut dyn DependencyResolver, Vec<Value>) -> Result<Value> + Send + Sync>;

/// Registered recipe for producing a value
#[derive(Clone)]
pub struct DependencyDefinition {
    identifier: String,
    aliases: Vec<String>,
    lifetime: Lifetime,
    factory: Factory,
}

impl DependencyDefinition {
    /// Create a transient definition
    pub fn new<S: Into<String>>(identifier: S, factory: Factory) -> Self {
        Self {
            identifier: identifier.into(),
            aliases: Vec::new(),
            lifetime: Lifetime::Transient,
            factory,
        }
    }

    /// Create a definition from a closure
    pub fn from_fn<S, F>(identifier: S, factory: F) -> Self
    where
        S: Into<String>,
        F: Fn(&mut dyn DependencyResolver, Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(identifier, Arc::new(factory))
    }

    /// Builder-style lifetime override
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Primary identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Aliases, in the order they were added
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Lifetime
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Shared handle to the factory
    pub fn factory(&self) -> Factory {
        Arc::clone(&self.factory)
    }

    /// Whether `identifier` is this definition's identifier or one of its aliases
    pub fn answers_to(&self, identifier: &str) -> bool {
        self.identifier == identifier || self.aliases.iter().any(|alias| alias == identifier)
    }

    /// Change the lifetime. Uniqueness is the registry's concern.
    pub fn set_lifetime(&mut self, lifetime: Lifetime) {
        self.lifetime = lifetime;
    }

    /// Add an alias. Uniqueness is the registry's concern.
    pub fn add_alias<S: Into<String>>(&mut self, alias: S) {
        self.aliases.push(alias.into());
    }
}

impl fmt::Debug for DependencyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyDefinition")
            .field("identifier", &self.identifier)
            .field("aliases", &self.aliases)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
