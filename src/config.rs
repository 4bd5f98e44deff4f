use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Remote resolution constants
// =============================================================================

/// Default host serving action repositories
pub const DEFAULT_HOST: &str = "github.com";

/// Default git binary name, looked up on PATH
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Timeout for a single `git ls-remote` invocation in milliseconds (30 seconds)
pub const DEFAULT_GIT_TIMEOUT_MS: u64 = 30_000;

/// Ref prefix identifying tags in `git ls-remote` output
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Suffix git appends to peeled annotated tag refs
pub const PEELED_REF_SUFFIX: &str = "^{}";

/// Updater configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Host the action repositories are cloned from
    pub host: String,
    /// Git binary name or path
    pub git: PathBuf,
    /// Per-invocation timeout in milliseconds, 0 disables it
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            git: PathBuf::from(DEFAULT_GIT_BINARY),
            timeout_ms: DEFAULT_GIT_TIMEOUT_MS,
        }
    }
}

/// Error type for loading configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Loads a JSON configuration file. Missing fields use their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces fields with the values given on the command line
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        git: Option<PathBuf>,
        timeout_ms: Option<u64>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(git) = git {
            self.git = git;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        self
    }

    /// Builds the clone URL for a repository identity (`owner/name`)
    pub fn repository_url(&self, repository: &str) -> String {
        format!("https://{}/{}.git", self.host, repository)
    }
}
