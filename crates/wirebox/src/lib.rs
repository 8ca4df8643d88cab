//! # wirebox
//!
//! Runtime dependency resolution: a registry of named definitions produces
//! values on demand, resolving whatever those factories and constructors need
//! in turn, while enforcing lifetime rules and detecting cycles.
//!
//! ## Features
//!
//! - **Three lifetimes**: transient, scoped and singleton, with a check that
//!   longer-lived values never capture shorter-lived ones
//! - **Cycle detection**: across identifier lookups and constructions alike
//! - **Auto-wiring**: unregistered parameter types are constructed from their
//!   class descriptors
//! - **Link-time registration**: classes contributed through the `CLASSES`
//!   distributed slice
//!
//! ## Example
//!
//! ```ignore
//! use wirebox::prelude::*;
//!
//! let mut builder = Container::builder();
//! builder.register_class(Class::concrete("Clock", Callable::nullary(|| Ok(value(Clock::default())))));
//! builder.add_class("Clock")?.singleton().alias("clock")?;
//!
//! let mut container = builder.build();
//! let clock = container.get_as::<Clock>("clock")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Definitions, descriptors, lifetimes, errors and the resolver port
//! - `infrastructure` - Resolution engine, builder, class catalog, config and logging

/// Domain layer - definitions, descriptors and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Infrastructure layer - resolution engine, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine at the crate root
pub use infrastructure::{
    ConfigLoader, Container, ContainerBuilder, ContainerConfig, DefinitionHandle, TypeCatalog,
};

/// Everything needed to register and resolve dependencies
pub mod prelude {
    pub use wirebox_domain::{
        Arguments, Callable, Class, DependencyResolver, Error, Lifetime, Parameter, ResolverExt,
        Result, Value, value,
    };
    pub use wirebox_infrastructure::reflection::ClassEntry;
    pub use wirebox_infrastructure::{Container, ContainerBuilder, TypeCatalog};
}
