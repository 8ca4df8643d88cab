//! # wirebox domain
//!
//! Core types of the wirebox dependency container: dependency definitions,
//! lifetimes, parameter/callable/class descriptors, the error taxonomy and
//! the [`DependencyResolver`](ports::DependencyResolver) port.
//!
//! This crate holds no resolution logic; see `wirebox-infrastructure`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{DependencyDefinition, Factory};
pub use error::{Error, Result};
pub use ports::{DependencyResolver, ResolverExt};
pub use value_objects::*;
