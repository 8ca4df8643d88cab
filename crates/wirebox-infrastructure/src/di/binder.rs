//! Parameter binding
//!
//! Turns a parameter list plus a positional prefix of known values into a
//! complete argument list. Each missing slot is filled by, in order:
//!
//! 1. an explicit identifier (`Parameter::inject`),
//! 2. the parameter's default value,
//! 3. the declared type used as an identifier (`get` when registered,
//!    otherwise `construct` when auto-wiring is enabled).
//!
//! Parameters with no declared type, or a built-in one, cannot be resolved and
//! fail with `NotFound`.

use tracing::{debug, trace};
use wirebox_domain::{DeclaredType, DependencyResolver, Error, Parameter, Result, Value};

/// Binds parameters against a resolver
pub struct ParameterBinder<'r, R: DependencyResolver + ?Sized> {
    resolver: &'r mut R,
    autowire: bool,
}

impl<'r, R: DependencyResolver + ?Sized> ParameterBinder<'r, R> {
    /// Create a binder with auto-wiring enabled
    pub fn new(resolver: &'r mut R) -> Self {
        Self {
            resolver,
            autowire: true,
        }
    }

    /// Enable or disable construction of unregistered types
    pub fn autowire(mut self, enabled: bool) -> Self {
        self.autowire = enabled;
        self
    }

    /// Produce the full ordered argument list.
    ///
    /// `known[i]` fills the i-th slot of `parameters`. Every slot is checked
    /// individually, even when `known` is as long as the parameter list.
    /// Values beyond the last parameter are dropped.
    pub fn bind(&mut self, parameters: &[Parameter], known: Vec<Value>) -> Result<Vec<Value>> {
        if known.len() > parameters.len() {
            debug!(
                supplied = known.len(),
                declared = parameters.len(),
                "Ignoring surplus positional arguments"
            );
        }

        let mut known: Vec<Option<Value>> = known.into_iter().map(Some).collect();
        let mut arguments = Vec::with_capacity(parameters.len());

        for (slot, parameter) in parameters.iter().enumerate() {
            let supplied = known.get_mut(slot).and_then(Option::take);
            let argument = match supplied {
                Some(value) => value,
                None => self.resolve(parameter)?,
            };
            arguments.push(argument);
        }

        Ok(arguments)
    }

    /// Resolve a single parameter that was not supplied by position
    pub fn resolve(&mut self, parameter: &Parameter) -> Result<Value> {
        if let Some(identifier) = parameter.injected_identifier() {
            trace!(parameter = parameter.name(), identifier, "Injecting by identifier");
            return self.resolver.get(identifier);
        }

        if let Some(default) = parameter.default_value() {
            trace!(parameter = parameter.name(), "Using default value");
            return Ok(default.clone());
        }

        let type_name = match parameter.declared_type() {
            Some(DeclaredType::Named(type_name)) => type_name.as_str(),
            _ => {
                return Err(Error::not_found(format!(
                    "value for parameter '{}'",
                    parameter.name()
                )));
            }
        };

        if !self.autowire || self.resolver.has(type_name) {
            trace!(parameter = parameter.name(), type_name, "Resolving by declared type");
            self.resolver.get(type_name)
        } else {
            trace!(parameter = parameter.name(), type_name, "Auto-wiring declared type");
            self.resolver.construct(type_name, Vec::new())
        }
    }
}
