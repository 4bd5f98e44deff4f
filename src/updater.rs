//! Workflow scanning and upgrade suggestion
//!
//! [`ActionsUpdater`] ties the parser, the tag registry and the run-scoped
//! [`TagCache`] together. One instance is reused across every file of a run so
//! a repository referenced from several workflows is listed once.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::parser::github_actions::GitHubActionsParser;
use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::ActionReference;
use crate::version::cache::TagCache;
use crate::version::checker::compare_version;
use crate::version::error::ResolutionError;
use crate::version::registry::Registry;

/// A reference whose repository publishes a strictly newer tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSuggestion {
    /// The `uses` value as written in the workflow
    pub reference: String,
    /// The newer tag
    pub latest: String,
}

impl fmt::Display for UpdateSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.reference, self.latest)
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Resolution stopped the file; `found` holds the suggestions made before it
    #[error("{source}")]
    Resolution {
        found: Vec<UpdateSuggestion>,
        source: ResolutionError,
    },
}

impl ScanError {
    /// Suggestions detected before the scan failed
    pub fn found(&self) -> &[UpdateSuggestion] {
        match self {
            ScanError::Resolution { found, .. } => found,
            _ => &[],
        }
    }
}

/// Resolves action references against their latest published tags
pub struct ActionsUpdater {
    parser: Arc<dyn Parser>,
    registry: Arc<dyn Registry>,
    cache: TagCache,
}

impl ActionsUpdater {
    /// Create an updater for GitHub Actions workflows with an empty cache
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            parser: Arc::new(GitHubActionsParser::new()),
            registry,
            cache: TagCache::new(),
        }
    }

    /// Tags resolved so far in this run
    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    /// Return the newer tag for a single `uses` reference, if one exists.
    ///
    /// References without a usable `owner/repo@tag` shape yield `Ok(None)`.
    pub async fn update(&mut self, reference: &str) -> Result<Option<String>, ResolutionError> {
        let Some(action) = ActionReference::parse(reference) else {
            debug!("Skipping unpinned reference {}", reference);
            return Ok(None);
        };

        let latest = self.latest_tag(&action.repository).await?;
        let result = compare_version(&action.tag, latest.as_deref());
        debug!(
            "{}: pinned {}, latest {:?}, status {:?}",
            action.repository, result.current_version, result.latest_version, result.status
        );

        Ok(result.upgrade().map(str::to_string))
    }

    /// Scan workflow content and collect the upgrade suggestions in document order.
    ///
    /// The first resolution failure ends the scan; suggestions made up to that
    /// point are carried in [`ScanError::Resolution`].
    pub async fn scan_content(
        &mut self,
        content: &[u8],
    ) -> Result<Vec<UpdateSuggestion>, ScanError> {
        let references = self.parser.parse(content)?;

        let mut suggestions = Vec::new();
        for reference in references {
            match self.update(&reference).await {
                Ok(Some(latest)) => suggestions.push(UpdateSuggestion { reference, latest }),
                Ok(None) => {}
                Err(source) => {
                    return Err(ScanError::Resolution {
                        found: suggestions,
                        source,
                    });
                }
            }
        }

        Ok(suggestions)
    }

    /// Read and scan a workflow file
    pub async fn scan_file(&mut self, path: &Path) -> Result<Vec<UpdateSuggestion>, ScanError> {
        info!("Scanning {}", path.display());
        let content = tokio::fs::read(path).await.map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_content(&content).await
    }

    async fn latest_tag(&mut self, repository: &str) -> Result<Option<String>, ResolutionError> {
        if let Some(latest) = self.cache.get(repository) {
            debug!("Cache hit for {}", repository);
            return Ok(latest.map(str::to_string));
        }

        let tags = self.registry.fetch_all_tags(repository).await?;
        let latest = tags.latest().map(str::to_string);
        // Tagless repositories are cached too so they are not listed again
        self.cache.insert(repository, latest.clone());

        Ok(latest)
    }
}
