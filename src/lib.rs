//! Reports newer tags for actions pinned in GitHub Actions workflows.
//!
//! - [`parser`]: extracts `uses` references from workflow YAML
//! - [`version`]: lists, caches and compares repository tags
//! - [`updater`]: scans workflows and produces upgrade suggestions
//! - [`report`]: writes the per-file suggestion report

pub mod config;
pub mod logging;
pub mod parser;
pub mod report;
pub mod updater;
pub mod version;
