//! Resolution stack
//!
//! Tracks the keys currently being resolved by one top-level request and its
//! recursive sub-resolutions. A key showing up twice is a cycle.

use wirebox_domain::ResolutionKey;

/// Ordered keys of in-flight resolutions
#[derive(Debug, Default)]
pub struct ResolutionStack {
    entries: Vec<ResolutionKey>,
}

impl ResolutionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is already being resolved
    pub fn contains(&self, key: &ResolutionKey) -> bool {
        self.entries.contains(key)
    }

    /// Push a key, returning the depth to unwind back to
    pub fn push(&mut self, key: ResolutionKey) -> usize {
        let depth = self.entries.len();
        self.entries.push(key);
        depth
    }

    /// Drop every entry above `depth`.
    ///
    /// A no-op when the stack was already cleared below `depth`.
    pub fn unwind_to(&mut self, depth: usize) {
        self.entries.truncate(depth);
    }

    /// Forget all in-flight resolutions
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Identifiers currently being resolved through definitions, outermost first
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(ResolutionKey::identifier)
    }

    /// Render the path from the outermost entry to `next`
    pub fn path_to(&self, next: &ResolutionKey) -> String {
        self.entries
            .iter()
            .chain(std::iter::once(next))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Number of in-flight resolutions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is being resolved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
