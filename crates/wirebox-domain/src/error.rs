//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// Requested identifier has no definition, or a parameter has nothing to resolve against
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// A key was requested again while it was still being resolved
    #[error("Circular reference to '{key}' ({path})")]
    CircularReference {
        /// The repeated identifier or type name
        key: String,
        /// Resolution path that led back to the key
        path: String,
    },

    /// A shorter-lived dependency would be captured by a longer-lived one
    #[error("Lifetime violation: '{identifier}' cannot be a dependency of '{dependent}'")]
    LifetimeViolation {
        /// The dependency being resolved
        identifier: String,
        /// The longer-lived dependency currently under construction
        dependent: String,
    },

    /// Identifier or alias is already taken by another definition
    #[error("Duplicate identifier: {identifier}")]
    DuplicateIdentifier {
        /// The colliding identifier or alias
        identifier: String,
    },

    /// A type could not be instantiated
    #[error("Construction error: {message}")]
    Construction {
        /// Description of the construction failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A produced value did not have the requested type
    #[error("Type mismatch: '{identifier}' is not a {expected}")]
    TypeMismatch {
        /// What was being resolved
        identifier: String,
        /// The requested type
        expected: &'static str,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a circular reference error
    pub fn circular_reference<K: Into<String>, P: Into<String>>(key: K, path: P) -> Self {
        Self::CircularReference {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Create a lifetime violation error
    pub fn lifetime_violation<I: Into<String>, D: Into<String>>(identifier: I, dependent: D) -> Self {
        Self::LifetimeViolation {
            identifier: identifier.into(),
            dependent: dependent.into(),
        }
    }

    /// Create a duplicate identifier error
    pub fn duplicate_identifier<S: Into<String>>(identifier: S) -> Self {
        Self::DuplicateIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(identifier: S, expected: &'static str) -> Self {
        Self::TypeMismatch {
            identifier: identifier.into(),
            expected,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        let message: String = message.into();
        Self::Generic(message.into())
    }
}

// Construction error creation methods
impl Error {
    /// Create a construction error wrapping its underlying cause
    pub fn construction_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Construction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error was raised by the resolution machinery itself.
    ///
    /// These kinds travel through construction unwrapped.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::CircularReference { .. } | Self::LifetimeViolation { .. }
        )
    }
}
