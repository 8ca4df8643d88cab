//! Dependency Injection Engine
//!
//! ```text
//! ContainerBuilder ──build()──► Container ──get / construct / invoke──► Value
//!        │                          │
//!   DefinitionHandle         ResolutionStack + LifetimeCache
//!   (lifetime, aliases)      ParameterBinder ──► TypeCatalog
//! ```
//!
//! The [`Container`] implements
//! [`DependencyResolver`](wirebox_domain::DependencyResolver); factories and
//! the [`ParameterBinder`] recurse into it through that trait.

pub mod binder;
pub mod builder;
pub mod cache;
pub mod container;
pub mod stack;

pub use binder::ParameterBinder;
pub use builder::{ContainerBuilder, DefinitionHandle};
pub use cache::LifetimeCache;
pub use container::Container;
pub use stack::ResolutionStack;
