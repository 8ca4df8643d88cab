//! Container builder
//!
//! Accumulates dependency definitions and rejects duplicate identifiers and
//! aliases. Definitions stay mutable through [`DefinitionHandle`] until
//! [`ContainerBuilder::build`] freezes them into a [`Container`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut builder = ContainerBuilder::new();
//! builder.add_class("app::Mailer")?.singleton().alias("mailer")?;
//! builder.add_value("smtp.host", value("localhost".to_string()))?;
//! let mut container = builder.build();
//! ```

use std::sync::Arc;

use tracing::info;
use wirebox_domain::{
    Callable, Class, DependencyDefinition, DependencyResolver, Error, Lifetime, Result, Value,
};

use crate::config::ContainerConfig;
use crate::di::container::Container;
use crate::reflection::TypeCatalog;

/// Accumulates definitions for a [`Container`]
pub struct ContainerBuilder {
    definitions: Vec<DependencyDefinition>,
    classes: TypeCatalog,
    default_lifetime: Lifetime,
    autowire: bool,
}

impl ContainerBuilder {
    /// Create a builder backed by the link-time class catalog
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            classes: TypeCatalog::linked(),
            default_lifetime: Lifetime::Transient,
            autowire: true,
        }
    }

    /// Create a builder honouring `config`'s default lifetime and auto-wiring setting
    pub fn from_config(config: &ContainerConfig) -> Self {
        Self {
            default_lifetime: config.default_lifetime,
            autowire: config.autowire,
            ..Self::new()
        }
    }

    /// Replace the class catalog
    pub fn with_catalog(mut self, classes: TypeCatalog) -> Self {
        self.classes = classes;
        self
    }

    /// Register a class descriptor for `construct` and `add_class`
    pub fn register_class(&mut self, class: Class) -> &mut Self {
        self.classes.register(class);
        self
    }

    /// Register a type, produced by constructing it
    pub fn add_class(&mut self, type_name: &str) -> Result<DefinitionHandle<'_>> {
        self.assert_availability_of(type_name)?;

        let class = type_name.to_string();
        self.push(DependencyDefinition::from_fn(
            type_name,
            move |resolver, parameters| resolver.construct(&class, parameters),
        ))
    }

    /// Register a callable whose parameters are resolved on invocation
    pub fn add_factory(
        &mut self,
        identifier: &str,
        factory: Callable,
    ) -> Result<DefinitionHandle<'_>> {
        self.assert_availability_of(identifier)?;

        self.push(DependencyDefinition::from_fn(
            identifier,
            move |resolver, parameters| resolver.invoke(&factory, parameters),
        ))
    }

    /// Register a closure that resolves its own dependencies
    pub fn add_factory_with<F>(&mut self, identifier: &str, factory: F) -> Result<DefinitionHandle<'_>>
    where
        F: Fn(&mut dyn DependencyResolver) -> Result<Value> + Send + Sync + 'static,
    {
        self.assert_availability_of(identifier)?;

        self.push(DependencyDefinition::from_fn(identifier, move |resolver, _| {
            factory(resolver)
        }))
    }

    /// Register a ready-made value
    pub fn add_value(&mut self, identifier: &str, value: Value) -> Result<DefinitionHandle<'_>> {
        self.assert_availability_of(identifier)?;

        self.push(DependencyDefinition::from_fn(identifier, move |_, _| {
            Ok(Arc::clone(&value))
        }))
    }

    /// Reconfigure the definition registered under a primary identifier
    pub fn configure(&mut self, identifier: &str) -> Option<DefinitionHandle<'_>> {
        let index = self
            .definitions
            .iter()
            .position(|definition| definition.identifier() == identifier)?;

        Some(DefinitionHandle {
            builder: self,
            index,
        })
    }

    /// Fail with `DuplicateIdentifier` if any definition answers to `identifier`
    pub fn assert_availability_of(&self, identifier: &str) -> Result<()> {
        if self
            .definitions
            .iter()
            .any(|definition| definition.answers_to(identifier))
        {
            return Err(Error::duplicate_identifier(identifier));
        }
        Ok(())
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Freeze the definitions into a container
    pub fn build(self) -> Container {
        info!(
            definitions = self.definitions.len(),
            classes = self.classes.len(),
            autowire = self.autowire,
            "Building container"
        );

        Container::with_catalog(self.definitions, Arc::new(self.classes))
            .with_autowire(self.autowire)
    }

    fn push(&mut self, definition: DependencyDefinition) -> Result<DefinitionHandle<'_>> {
        self.definitions
            .push(definition.with_lifetime(self.default_lifetime));
        let index = self.definitions.len() - 1;

        Ok(DefinitionHandle {
            builder: self,
            index,
        })
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent access to one definition inside a [`ContainerBuilder`]
pub struct DefinitionHandle<'b> {
    builder: &'b mut ContainerBuilder,
    index: usize,
}

impl DefinitionHandle<'_> {
    /// Create a new value on every request
    pub fn transient(self) -> Self {
        self.lifetime(Lifetime::Transient)
    }

    /// Reuse the value within a scope
    pub fn scoped(self) -> Self {
        self.lifetime(Lifetime::Scoped)
    }

    /// Reuse the value for the life of the container
    pub fn singleton(self) -> Self {
        self.lifetime(Lifetime::Singleton)
    }

    /// Set the lifetime
    pub fn lifetime(self, lifetime: Lifetime) -> Self {
        self.builder.definitions[self.index].set_lifetime(lifetime);
        self
    }

    /// Add an alias, rejecting names already taken anywhere in the builder
    pub fn alias(self, alias: &str) -> Result<Self> {
        self.builder.assert_availability_of(alias)?;
        self.builder.definitions[self.index].add_alias(alias);
        Ok(self)
    }

    /// The definition being configured
    pub fn definition(&self) -> &DependencyDefinition {
        &self.builder.definitions[self.index]
    }

    /// Primary identifier of the definition
    pub fn identifier(&self) -> &str {
        self.definition().identifier()
    }
}
