//! # Infrastructure Layer
//!
//! The wirebox resolution engine and its supporting concerns.
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Container, builder, parameter binder, stack and cache |
//! | [`reflection`] | Class catalog with link-time registration |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML/environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extensions for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod reflection;

// Re-export commonly used types
pub use config::{ConfigLoader, ContainerConfig};
pub use di::{Container, ContainerBuilder, DefinitionHandle};
pub use error_ext::ErrorContext;
pub use reflection::{ClassEntry, TypeCatalog};
