//! Version comparison for pinned action tags

use std::cmp::Ordering;

use crate::version::semver::compare_tags;

/// Result of version comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCompareResult {
    /// Tag pinned in the workflow
    pub current_version: String,
    /// Latest tag published by the repository (if any)
    pub latest_version: Option<String>,
    /// Version status
    pub status: VersionStatus,
}

/// Status of the pinned tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Pinned tag is the latest (or ties with it)
    Latest,
    /// A strictly newer tag exists
    Outdated,
    /// Pinned tag is newer than the latest tag
    Newer,
    /// The repository publishes no tags
    NoTags,
}

impl VersionCompareResult {
    /// The tag to upgrade to, present only when the pinned tag is outdated
    pub fn upgrade(&self) -> Option<&str> {
        match self.status {
            VersionStatus::Outdated => self.latest_version.as_deref(),
            _ => None,
        }
    }
}

/// Compare a pinned tag against the repository's latest tag
pub fn compare_version(current_version: &str, latest_version: Option<&str>) -> VersionCompareResult {
    let Some(latest) = latest_version.filter(|latest| !latest.is_empty()) else {
        return VersionCompareResult {
            current_version: current_version.to_string(),
            latest_version: None,
            status: VersionStatus::NoTags,
        };
    };

    let status = match compare_tags(latest, current_version) {
        Ordering::Greater => VersionStatus::Outdated,
        Ordering::Equal => VersionStatus::Latest,
        Ordering::Less => VersionStatus::Newer,
    };

    VersionCompareResult {
        current_version: current_version.to_string(),
        latest_version: Some(latest.to_string()),
        status,
    }
}
