//! `git ls-remote` registry implementation

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::{Config, PEELED_REF_SUFFIX, TAG_REF_PREFIX};
use crate::version::error::ResolutionError;
use crate::version::registry::Registry;
use crate::version::types::RepositoryTags;

/// Registry implementation listing remote tags through the git CLI
pub struct GitRegistry {
    config: Config,
}

impl GitRegistry {
    /// Creates a new GitRegistry from the updater configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn timeout(&self) -> Option<Duration> {
        (self.config.timeout_ms > 0).then(|| Duration::from_millis(self.config.timeout_ms))
    }

    fn command(&self, git: PathBuf, url: &str) -> Command {
        let mut cmd = Command::new(git);
        cmd.args([
            "-c",
            "versionsort.suffix=-",
            "ls-remote",
            "--tags",
            "--sort=v:refname",
            url,
        ])
        // Missing repositories otherwise block on a credential prompt
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .kill_on_drop(true);
        cmd
    }
}

impl Default for GitRegistry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[async_trait::async_trait]
impl Registry for GitRegistry {
    async fn fetch_all_tags(&self, repository: &str) -> Result<RepositoryTags, ResolutionError> {
        let git = which::which(&self.config.git)?;
        let url = self.config.repository_url(repository);
        debug!("Listing tags: {} ls-remote --tags {}", git.display(), url);

        let mut command = self.command(git, &url);
        let output_future = command.output();
        let output = match self.timeout() {
            Some(duration) => tokio::time::timeout(duration, output_future)
                .await
                .map_err(|_| {
                    warn!(
                        "git ls-remote for {} timed out after {}ms",
                        repository, self.config.timeout_ms
                    );
                    ResolutionError::TimedOut {
                        repository: repository.to_string(),
                        timeout_ms: self.config.timeout_ms,
                    }
                })??,
            None => output_future.await?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                "git ls-remote for {} exited with {}: {}",
                repository, output.status, stderr
            );
            return Err(ResolutionError::CommandFailed {
                repository: repository.to_string(),
                status: output.status,
                stderr,
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| ResolutionError::InvalidOutput {
                repository: repository.to_string(),
                reason: e.to_string(),
            })?;

        let tags = parse_ls_remote_output(&stdout);
        debug!("Found {} tags for {}", tags.len(), repository);

        Ok(RepositoryTags::new(tags))
    }
}

/// Extract tag names from `git ls-remote` output
///
/// Each line is `<hash><whitespace><ref>`. Only `refs/tags/*` refs are kept,
/// and peeled `^{}` entries of annotated tags are skipped.
pub fn parse_ls_remote_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let _hash = fields.next()?;
            fields.next()
        })
        .filter_map(|reference| reference.strip_prefix(TAG_REF_PREFIX))
        .filter(|tag| !tag.is_empty() && !tag.ends_with(PEELED_REF_SUFFIX))
        .map(str::to_string)
        .collect()
}
