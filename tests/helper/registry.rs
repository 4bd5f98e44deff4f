//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use actions_updater::version::error::ResolutionError;
use actions_updater::version::registry::Registry;
use actions_updater::version::types::RepositoryTags;

/// Mock registry for testing that records every listing request
pub struct MockRegistry {
    tags: HashMap<String, Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tags(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Repositories listed so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_all_tags(&self, repository: &str) -> Result<RepositoryTags, ResolutionError> {
        self.calls.lock().unwrap().push(repository.to_string());
        match self.tags.get(repository) {
            Some(tags) => Ok(RepositoryTags::new(tags.clone())),
            None => Err(ResolutionError::InvalidOutput {
                repository: repository.to_string(),
                reason: "repository not found".to_string(),
            }),
        }
    }
}

/// Write a workflow file into `dir` and return its path
pub fn write_workflow(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
