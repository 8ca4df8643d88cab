//! Dependency lifetimes

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a produced value is reused by the container.
///
/// The ordering is significant: a dependency may never be captured by a
/// dependent with a strictly longer lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Lifetime {
    /// Created every time it is requested
    #[default]
    Transient = 0,
    /// Created once per scope
    Scoped = 1,
    /// Created once for the life of the container
    Singleton = 2,
}

impl Lifetime {
    /// Whether values with this lifetime are kept by the container
    pub fn is_cached(self) -> bool {
        self != Self::Transient
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transient => "transient",
            Self::Scoped => "scoped",
            Self::Singleton => "singleton",
        };
        f.write_str(name)
    }
}
