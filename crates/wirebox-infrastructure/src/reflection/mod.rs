//! Reflection substitute
//!
//! The container constructs types from explicit [`Class`](wirebox_domain::Class)
//! descriptors held in a [`TypeCatalog`].

pub mod catalog;

pub use catalog::{CLASSES, ClassEntry, ReflectionError, TypeCatalog, list_linked_classes};
