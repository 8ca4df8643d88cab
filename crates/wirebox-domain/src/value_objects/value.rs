//! Type-erased values and argument lists

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A value produced or consumed by the container.
///
/// Identity of a value is the identity of its allocation, so two resolutions
/// returned "the same instance" exactly when `Arc::ptr_eq` holds.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Wrap any shareable value
pub fn value<T: Any + Send + Sync>(inner: T) -> Value {
    Arc::new(inner)
}

/// Downcast a value, naming `what` in the error on mismatch
pub fn downcast<T: Any + Send + Sync>(value: Value, what: &str) -> Result<Arc<T>> {
    value
        .downcast::<T>()
        .map_err(|_| Error::type_mismatch(what, type_name::<T>()))
}

/// Fully bound argument list handed to a callable body
#[derive(Clone, Default)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    /// Create an argument list
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `index`
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Typed value at `index`
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let value = self.values.get(index).cloned().ok_or_else(|| {
            Error::invalid_argument(format!(
                "No argument at position {index} ({} supplied)",
                self.values.len()
            ))
        })?;
        downcast(value, &format!("argument #{index}"))
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arguments")
            .field("len", &self.values.len())
            .finish()
    }
}
