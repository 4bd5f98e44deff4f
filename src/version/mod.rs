//! Version management layer for action tag checking
//!
//! This module provides the core functionality for listing, caching, and comparing
//! the tags of action repositories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Registry  │────▶│  TagCache   │◀────│   Checker   │
//! │  (list)     │     │  (per run)  │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Registries │                         │   Semver    │
//! │ (git remote)│                         │ (tag order) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory latest-tag cache scoped to one run
//! - [`checker`]: Version comparison and status determination
//! - [`registry`]: Registry trait for listing tags from remote sources
//! - [`registries`]: Concrete registry implementations (git CLI)
//! - [`error`]: Error types for registry operations
//! - [`semver`]: Tag parsing and ordering
//! - [`types`]: Common types like `RepositoryTags`

pub mod cache;
pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod semver;
pub mod types;
