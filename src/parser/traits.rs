//! Parser trait definition

use indexmap::IndexSet;

/// Trait for extracting action references from workflow content
pub trait Parser: Send + Sync {
    /// Parse the content and return the unique `uses` references in document order
    fn parse(&self, content: &[u8]) -> Result<IndexSet<String>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The content is not valid YAML
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// The YAML does not have the jobs/steps/uses shape
    #[error("Unexpected workflow structure: {0}")]
    InvalidStructure(String),
}
