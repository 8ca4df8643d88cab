//! Configuration
//!
//! Layered configuration (defaults, TOML file, environment) loaded with
//! figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ContainerConfig, LoggingConfig};
