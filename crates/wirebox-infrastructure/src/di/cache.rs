//! Lifetime-tiered value cache

use std::collections::HashMap;

use wirebox_domain::{Lifetime, Value};

/// Produced values, keyed by primary identifier.
///
/// Singleton values live as long as the cache; scoped values are dropped
/// wholesale when a new scope begins. Transient values are never stored.
#[derive(Default)]
pub struct LifetimeCache {
    singleton: HashMap<String, Value>,
    scoped: HashMap<String, Value>,
}

impl LifetimeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `identifier`, singleton tier first
    pub fn get(&self, identifier: &str) -> Option<Value> {
        self.singleton
            .get(identifier)
            .or_else(|| self.scoped.get(identifier))
            .cloned()
    }

    /// Store a value in the tier matching `lifetime`
    pub fn store(&mut self, identifier: &str, lifetime: Lifetime, value: Value) {
        if !lifetime.is_cached() {
            return;
        }

        let tier = if lifetime == Lifetime::Singleton {
            &mut self.singleton
        } else {
            &mut self.scoped
        };
        tier.insert(identifier.to_string(), value);
    }

    /// Drop every scoped value
    pub fn clear_scoped(&mut self) {
        self.scoped.clear();
    }

    /// Number of cached values in `lifetime`'s tier
    pub fn len_of(&self, lifetime: Lifetime) -> usize {
        match lifetime {
            Lifetime::Singleton => self.singleton.len(),
            Lifetime::Scoped => self.scoped.len(),
            Lifetime::Transient => 0,
        }
    }
}

impl std::fmt::Debug for LifetimeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifetimeCache")
            .field("singleton", &self.singleton.keys().collect::<Vec<_>>())
            .field("scoped", &self.scoped.keys().collect::<Vec<_>>())
            .finish()
    }
}
