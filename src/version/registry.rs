//! Registry trait for listing the tags of action repositories

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolutionError;
use crate::version::types::RepositoryTags;

/// Trait for fetching the tags published by a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all tags for a repository
    ///
    /// # Arguments
    /// * `repository` - The repository identity (e.g., "actions/checkout")
    ///
    /// # Returns
    /// * `Ok(RepositoryTags)` - List of tags, ordered from oldest to newest
    /// * `Err(ResolutionError)` - If the listing fails
    async fn fetch_all_tags(&self, repository: &str) -> Result<RepositoryTags, ResolutionError>;
}
