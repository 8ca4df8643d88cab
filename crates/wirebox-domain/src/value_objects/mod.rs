//! Domain Value Objects
//!
//! Immutable descriptors the container works with. Rust has no runtime
//! reflection, so parameter lists, callables and classes are described
//! explicitly and handed to the container as data.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Lifetime`] | Reuse policy of a produced value |
//! | [`Value`] / [`Arguments`] | Type-erased values and bound argument lists |
//! | [`Parameter`] | Descriptor of one parameter slot |
//! | [`Callable`] | Parameter list plus body |
//! | [`Class`] | Named type with an optional constructor |
//! | [`ResolutionKey`] | Tagged key of an in-flight resolution |

/// Resolution stack keys
pub mod key;
/// Dependency lifetimes
pub mod lifetime;
/// Parameter descriptors
pub mod parameter;
/// Callable and class descriptors
pub mod signature;
/// Type-erased values
pub mod value;

pub use key::ResolutionKey;
pub use lifetime::Lifetime;
pub use parameter::{DeclaredType, Parameter};
pub use signature::{Callable, CallableBody, Class, ClassKind};
pub use value::{Arguments, Value, downcast, value};
