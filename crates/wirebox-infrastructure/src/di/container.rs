//! Resolution engine
//!
//! [`Container`] owns the definitions, the class catalog, the lifetime cache
//! and the resolution stack. Every public operation runs to completion
//! synchronously; shared use across threads needs external locking.
//!
//! ## Resolution flow
//!
//! ```text
//! get(id) ──► definition? ──► on stack? ──► cached? ──► lifetime ok? ──► factory
//!                 │ no            │ yes         │ yes         │ no          │
//!              NotFound     CircularReference  value   LifetimeViolation   cache + value
//!
//! construct(T) ──► on stack? ──► class in catalog & concrete? ──► bind ──► constructor
//! ```

use std::sync::Arc;

use tracing::{debug, trace, warn};
use wirebox_domain::{
    Arguments, Callable, DependencyDefinition, DependencyResolver, Error, Lifetime, ResolutionKey,
    Result, Value,
};

use crate::di::binder::ParameterBinder;
use crate::di::builder::ContainerBuilder;
use crate::di::cache::LifetimeCache;
use crate::di::stack::ResolutionStack;
use crate::error_ext::ErrorContext;
use crate::reflection::TypeCatalog;

/// Dependency resolution engine
pub struct Container {
    definitions: Vec<DependencyDefinition>,
    classes: Arc<TypeCatalog>,
    autowire: bool,
    cache: LifetimeCache,
    stack: ResolutionStack,
}

impl Container {
    /// Create a container over `definitions` using the link-time class catalog
    pub fn new(definitions: Vec<DependencyDefinition>) -> Self {
        Self::with_catalog(definitions, Arc::new(TypeCatalog::linked()))
    }

    /// Create a container over `definitions` and an explicit class catalog
    pub fn with_catalog(definitions: Vec<DependencyDefinition>, classes: Arc<TypeCatalog>) -> Self {
        Self {
            definitions,
            classes,
            autowire: true,
            cache: LifetimeCache::new(),
            stack: ResolutionStack::new(),
        }
    }

    /// Start building a container
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Enable or disable construction of unregistered parameter types
    pub fn with_autowire(mut self, enabled: bool) -> Self {
        self.autowire = enabled;
        self
    }

    /// Whether unregistered parameter types are constructed
    pub fn autowire(&self) -> bool {
        self.autowire
    }

    /// Definition answering to an identifier or alias
    pub fn definition(&self, identifier: &str) -> Option<&DependencyDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.answers_to(identifier))
    }

    /// Primary identifiers in registration order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(DependencyDefinition::identifier)
    }

    /// The class catalog used by `construct`
    pub fn classes(&self) -> &TypeCatalog {
        &self.classes
    }

    /// Number of resolutions currently in flight
    pub fn resolution_depth(&self) -> usize {
        self.stack.len()
    }

    /// Reject a resolution that would let a longer-lived dependency capture
    /// a shorter-lived one.
    fn ensure_lifetime_expectancy_of(&mut self, identifier: &str, lifetime: Lifetime) -> Result<()> {
        let dependent = self
            .stack
            .identifiers()
            .find(|other| {
                self.definition(other)
                    .is_some_and(|definition| lifetime < definition.lifetime())
            })
            .map(str::to_string);

        match dependent {
            Some(dependent) => {
                self.stack.clear();
                warn!(identifier, %dependent, %lifetime, "Lifetime violation");
                Err(Error::lifetime_violation(identifier, dependent))
            }
            None => Ok(()),
        }
    }

    /// Fail with `CircularReference` when `key` is already in flight
    fn ensure_not_in_flight(&mut self, key: &ResolutionKey) -> Result<()> {
        if !self.stack.contains(key) {
            return Ok(());
        }

        let path = self.stack.path_to(key);
        self.stack.clear();
        warn!(key = %key, %path, "Circular reference detected");
        Err(Error::circular_reference(key.name(), path))
    }

    fn instantiate(&mut self, type_name: &str, parameters: Vec<Value>) -> Result<Value> {
        let classes = Arc::clone(&self.classes);
        let constructor = classes
            .constructor_of(type_name)
            .construction_context(format!("Cannot construct {type_name}"))?;

        debug!(type_name, "Constructing");
        self.call(constructor, parameters)
    }

    fn call(&mut self, callable: &Callable, parameters: Vec<Value>) -> Result<Value> {
        if callable.parameters().is_empty() {
            return callable.call(Arguments::default());
        }

        let autowire = self.autowire;
        let arguments = ParameterBinder::new(self)
            .autowire(autowire)
            .bind(callable.parameters(), parameters)?;

        callable.call(Arguments::new(arguments))
    }
}

impl DependencyResolver for Container {
    fn has(&self, identifier: &str) -> bool {
        self.definition(identifier).is_some()
    }

    fn get(&mut self, identifier: &str) -> Result<Value> {
        let (primary, lifetime, factory) = match self.definition(identifier) {
            Some(definition) => (
                definition.identifier().to_string(),
                definition.lifetime(),
                definition.factory(),
            ),
            None => {
                return Err(Error::not_found(format!(
                    "dependency definition for '{identifier}'"
                )));
            }
        };

        let key = ResolutionKey::Identifier(primary.clone());
        self.ensure_not_in_flight(&key)?;

        if let Some(cached) = self.cache.get(&primary) {
            trace!(identifier = %primary, "Cache hit");
            return Ok(cached);
        }

        self.ensure_lifetime_expectancy_of(&primary, lifetime)?;

        debug!(identifier = %primary, %lifetime, "Invoking factory");
        let depth = self.stack.push(key);
        let resolver: &mut dyn DependencyResolver = self;
        let produced = factory(resolver, Vec::new());
        self.stack.unwind_to(depth);

        let value = produced.inspect_err(|error| {
            if !error.is_resolution_failure() {
                warn!(identifier = %primary, %error, "Factory failed");
            }
        })?;
        self.cache.store(&primary, lifetime, value.clone());
        Ok(value)
    }

    fn construct(&mut self, type_name: &str, parameters: Vec<Value>) -> Result<Value> {
        let key = ResolutionKey::TypeName(type_name.to_string());
        self.ensure_not_in_flight(&key)?;

        let depth = self.stack.push(key);
        let constructed = self.instantiate(type_name, parameters);
        self.stack.unwind_to(depth);

        constructed
    }

    fn invoke(&mut self, callable: &Callable, parameters: Vec<Value>) -> Result<Value> {
        self.call(callable, parameters)
    }

    fn begin_scope(&mut self) {
        debug!(
            discarded = self.cache.len_of(Lifetime::Scoped),
            "Beginning new scope"
        );
        self.cache.clear_scoped();
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("definitions", &self.definitions)
            .field("classes", &self.classes.len())
            .field("autowire", &self.autowire)
            .field("cache", &self.cache)
            .field("stack", &self.stack)
            .finish()
    }
}
