//! GitHub Actions workflow file parser

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, de};
use tracing::warn;

use crate::parser::traits::{ParseError, Parser};

/// Workflow document shape. Only `jobs.*.steps[*].uses` is read.
#[derive(Debug, Default, Deserialize)]
struct Workflow {
    #[serde(default)]
    jobs: Option<IndexMap<String, Option<Job>>>,
}

#[derive(Debug, Default, Deserialize)]
struct Job {
    #[serde(default)]
    steps: Option<Vec<Option<Step>>>,
}

#[derive(Debug, Default, Deserialize)]
struct Step {
    #[serde(default, deserialize_with = "scalar_to_string")]
    uses: Option<String>,
}

/// Accept any scalar as `uses`; numbers and booleans keep their YAML spelling
fn scalar_to_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a scalar `uses` value, found {other:?}"
        ))),
    }
}

/// Parser for GitHub Actions workflow files (.github/workflows/*.yml)
pub struct GitHubActionsParser;

impl GitHubActionsParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitHubActionsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for GitHubActionsParser {
    fn parse(&self, content: &[u8]) -> Result<IndexSet<String>, ParseError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(IndexSet::new());
        }

        // Decode in two passes so grammar errors and shape errors stay distinct
        let value: serde_yaml::Value = serde_yaml::from_slice(content).map_err(|e| {
            warn!("Failed to parse YAML content: {}", e);
            ParseError::InvalidSyntax(e.to_string())
        })?;

        if value.is_null() {
            return Ok(IndexSet::new());
        }

        let workflow: Workflow = serde_yaml::from_value(value).map_err(|e| {
            warn!("YAML content is not a workflow: {}", e);
            ParseError::InvalidStructure(e.to_string())
        })?;

        Ok(collect_uses(workflow))
    }
}

/// Collect every non-empty step `uses` value, keeping the first occurrence order
fn collect_uses(workflow: Workflow) -> IndexSet<String> {
    workflow
        .jobs
        .unwrap_or_default()
        .into_values()
        .flatten()
        .flat_map(|job| job.steps.unwrap_or_default())
        .flatten()
        .filter_map(|step| step.uses)
        .filter(|uses| !uses.is_empty())
        .collect()
}
