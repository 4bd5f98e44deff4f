use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("git executable not found: {0}")]
    GitNotFound(#[from] which::Error),

    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git ls-remote for {repository} failed ({status}): {stderr}")]
    CommandFailed {
        repository: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("git ls-remote for {repository} timed out after {timeout_ms}ms")]
    TimedOut { repository: String, timeout_ms: u64 },

    #[error("Invalid git output for {repository}: {reason}")]
    InvalidOutput { repository: String, reason: String },
}
