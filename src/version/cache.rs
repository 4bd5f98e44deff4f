//! Run-scoped cache of the latest tag per repository

use std::collections::HashMap;

/// Maps a repository identity to its resolved latest tag.
///
/// `Some(None)` records a repository that publishes no tags, so it is not
/// listed again.
#[derive(Debug, Default)]
pub struct TagCache {
    latest: HashMap<String, Option<String>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached latest tag. `None` means the repository was never resolved.
    pub fn get(&self, repository: &str) -> Option<Option<&str>> {
        self.latest.get(repository).map(Option::as_deref)
    }

    pub fn insert(&mut self, repository: &str, latest: Option<String>) {
        self.latest.insert(repository.to_string(), latest);
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}
