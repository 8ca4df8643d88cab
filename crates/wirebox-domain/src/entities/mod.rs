//! Domain Entities
//!
//! Objects with identity. A [`DependencyDefinition`] is identified by its
//! primary identifier for the whole life of a registry.

/// Dependency definitions
pub mod definition;

pub use definition::{DependencyDefinition, Factory};
