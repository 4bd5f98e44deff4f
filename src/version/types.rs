//! Common types for the version layer

/// Tags published by one repository, in ascending version order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryTags {
    pub tags: Vec<String>,
}

impl RepositoryTags {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The highest tag, i.e. the last one in the listing
    pub fn latest(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }
}
