//! Common types for parsers

/// An action reference split into its repository identity and pinned tag
///
/// `actions/aws/ec2@v1` becomes `repository = "actions/aws"`, `tag = "v1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReference {
    /// Repository identity (`owner/name`), subpaths removed
    pub repository: String,
    /// Pinned tag exactly as written after the `@`
    pub tag: String,
}

impl ActionReference {
    /// Parse a `uses` value of the form `owner/repo[/subpath]@tag`
    ///
    /// Returns `None` when the value has no `@`, or when the repository or
    /// tag side is empty. Such references are local actions, docker images or
    /// otherwise unpinned, and are not compared.
    pub fn parse(value: &str) -> Option<Self> {
        let (repo_part, tag) = value.split_once('@')?;
        if repo_part.is_empty() || tag.is_empty() {
            return None;
        }

        // Tags are published per repository, so ignore subdirectories like actions/aws/ec2
        let repository = repo_part.splitn(3, '/').take(2).collect::<Vec<_>>().join("/");

        Some(Self {
            repository,
            tag: tag.to_string(),
        })
    }
}
