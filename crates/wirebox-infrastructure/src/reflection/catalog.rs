//! Class catalog
//!
//! Registry of [`Class`] descriptors the container can construct. Classes can
//! be registered on a catalog directly or contributed at link time through the
//! [`CLASSES`] distributed slice:
//!
//! ```ignore
//! #[linkme::distributed_slice(wirebox_infrastructure::reflection::CLASSES)]
//! static MAILER: ClassEntry = ClassEntry {
//!     name: "app::Mailer",
//!     describe: || Class::concrete("app::Mailer", Callable::nullary(|| Ok(value(Mailer)))),
//! };
//! ```

use std::collections::HashMap;

use thiserror::Error;
use wirebox_domain::{Callable, Class, ClassKind};

/// Link-time class registration entry
pub struct ClassEntry {
    /// Fully qualified type name
    pub name: &'static str,
    /// Builds the class descriptor
    pub describe: fn() -> Class,
}

// Auto-collection via linkme distributed slices - crates submit entries at compile time
#[linkme::distributed_slice]
pub static CLASSES: [ClassEntry] = [..];

/// Failure to look up or instantiate a class
#[derive(Debug, Error)]
pub enum ReflectionError {
    /// No class registered under the name
    #[error("Class \"{name}\" does not exist")]
    ClassNotFound {
        /// Requested type name
        name: String,
    },

    /// The class exists but cannot be instantiated
    #[error("{name} is not instantiable ({kind:?})")]
    NotInstantiable {
        /// Requested type name
        name: String,
        /// What the class actually is
        kind: ClassKind,
    },
}

/// Class descriptors by type name
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    classes: HashMap<String, Class>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every class registered through [`CLASSES`]
    pub fn linked() -> Self {
        let mut catalog = Self::new();
        for entry in CLASSES {
            catalog.register((entry.describe)());
        }
        catalog
    }

    /// Register a class, replacing any class of the same name
    pub fn register(&mut self, class: Class) -> &mut Self {
        self.classes.insert(class.name().to_string(), class);
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, class: Class) -> Self {
        self.register(class);
        self
    }

    /// Look up a class
    pub fn find(&self, name: &str) -> Result<&Class, ReflectionError> {
        self.classes
            .get(name)
            .ok_or_else(|| ReflectionError::ClassNotFound {
                name: name.to_string(),
            })
    }

    /// Constructor of an instantiable class
    pub fn constructor_of(&self, name: &str) -> Result<&Callable, ReflectionError> {
        let class = self.find(name)?;
        match class.constructor() {
            Some(constructor) if class.is_instantiable() => Ok(constructor),
            _ => Err(ReflectionError::NotInstantiable {
                name: name.to_string(),
                kind: class.kind(),
            }),
        }
    }

    /// Whether a class is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Names of all classes registered at link time
pub fn list_linked_classes() -> Vec<&'static str> {
    CLASSES.iter().map(|entry| entry.name).collect()
}
