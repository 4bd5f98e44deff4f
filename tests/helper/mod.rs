#![allow(dead_code)]

pub mod registry;

pub use registry::{MockRegistry, write_workflow};
