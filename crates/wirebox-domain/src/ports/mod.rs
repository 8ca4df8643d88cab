//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the container implementation.
//! High-level code depends on [`DependencyResolver`]; the infrastructure
//! crate provides the container that implements it.

/// Resolution contract
pub mod resolver;

pub use resolver::{DependencyResolver, ResolverExt};
