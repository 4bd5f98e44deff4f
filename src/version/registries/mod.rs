//! Registry implementations for listing repository tags

pub mod git;

pub use git::GitRegistry;
