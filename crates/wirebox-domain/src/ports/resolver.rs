//! Dependency resolver port
//!
//! The contract every container exposes to its callers and to the factories
//! it runs. Factories receive `&mut dyn DependencyResolver`, so they can pull
//! further dependencies without knowing the concrete container type.

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{Callable, Value, downcast};

/// Resolves identifiers, constructs types and invokes callables
pub trait DependencyResolver {
    /// Whether a definition exists for the identifier or alias
    fn has(&self, identifier: &str) -> bool;

    /// Produce the value registered under an identifier or alias
    fn get(&mut self, identifier: &str) -> Result<Value>;

    /// Construct a type, binding constructor parameters not supplied in `parameters`
    fn construct(&mut self, type_name: &str, parameters: Vec<Value>) -> Result<Value>;

    /// Invoke a callable, binding parameters not supplied in `parameters`
    fn invoke(&mut self, callable: &Callable, parameters: Vec<Value>) -> Result<Value>;

    /// Start a new scope, discarding all scoped values
    fn begin_scope(&mut self);
}

/// Typed access on top of [`DependencyResolver`]
pub trait ResolverExt: DependencyResolver {
    /// `get` and downcast to `T`
    fn get_as<T: Any + Send + Sync>(&mut self, identifier: &str) -> Result<Arc<T>> {
        downcast(self.get(identifier)?, identifier)
    }

    /// `construct` and downcast to `T`
    fn construct_as<T: Any + Send + Sync>(
        &mut self,
        class: &str,
        parameters: Vec<Value>,
    ) -> Result<Arc<T>> {
        downcast(self.construct(class, parameters)?, class)
    }

    /// `invoke` and downcast the result to `T`
    fn invoke_as<T: Any + Send + Sync>(
        &mut self,
        callable: &Callable,
        parameters: Vec<Value>,
    ) -> Result<Arc<T>> {
        downcast(self.invoke(callable, parameters)?, "invocation result")
    }
}

impl<R: DependencyResolver + ?Sized> ResolverExt for R {}
