//! Global defaults for codefence.
//!
//! This module defines the `Settings` struct: the lowest-precedence value
//! for every display field and the annotation defaults. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for optional fields, and validation of enumerated names.
//!
//! Settings are always passed explicitly to the resolver.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{AnnotationDefaults, DisplayDefaults, Settings};
