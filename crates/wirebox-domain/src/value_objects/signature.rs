//! Callable and class descriptors
//!
//! Stand-ins for runtime reflection: a [`Callable`] is a parameter list plus a
//! body, a [`Class`] is a named type with an optional constructor.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::parameter::Parameter;
use crate::value_objects::value::{Arguments, Value};

/// Body of a callable, invoked with the fully bound argument list
pub type CallableBody = Arc<dyn Fn(Arguments) -> Result<Value> + Send + Sync>;

/// A function-like value with a described parameter list
#[derive(Clone)]
pub struct Callable {
    parameters: Vec<Parameter>,
    body: CallableBody,
}

impl Callable {
    /// Create a callable; parameter positions follow list order
    pub fn new<F>(parameters: Vec<Parameter>, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        let parameters = parameters
            .into_iter()
            .enumerate()
            .map(|(position, parameter)| parameter.at(position))
            .collect();

        Self {
            parameters,
            body: Arc::new(body),
        }
    }

    /// Create a callable without parameters
    pub fn nullary<F>(body: F) -> Self
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(Vec::new(), move |_| body())
    }

    /// Declared parameters
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Invoke the body
    pub fn call(&self, arguments: Arguments) -> Result<Value> {
        (self.body)(arguments)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// What kind of type a class descriptor stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// Can be instantiated through its constructor
    Concrete,
    /// Abstract base, never instantiated
    Abstract,
    /// Interface or trait, never instantiated
    Interface,
}

/// Descriptor of a constructible (or deliberately non-constructible) type
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    kind: ClassKind,
    constructor: Option<Callable>,
}

impl Class {
    /// A concrete class built by `constructor`
    pub fn concrete<S: Into<String>>(name: S, constructor: Callable) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Concrete,
            constructor: Some(constructor),
        }
    }

    /// An abstract class
    pub fn abstract_class<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Abstract,
            constructor: None,
        }
    }

    /// An interface
    pub fn interface<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Interface,
            constructor: None,
        }
    }

    /// Fully qualified type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class kind
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Constructor, present only for concrete classes
    pub fn constructor(&self) -> Option<&Callable> {
        self.constructor.as_ref()
    }

    /// Whether the class can be instantiated
    pub fn is_instantiable(&self) -> bool {
        self.kind == ClassKind::Concrete && self.constructor.is_some()
    }
}
