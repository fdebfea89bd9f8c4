//! Codefence: configuration resolution for annotated fenced code blocks.
//!
//! A block is raw text with an optional configuration prelude. Resolution
//! splits the prelude from the body, parses it into typed sections, merges
//! it over a named preset and a page-level layer, substitutes global
//! defaults, narrows the body through the filter chain and attaches
//! annotations to the resulting lines.
//!
//! The entry point is [`resolve_block`]. The pieces are public for callers
//! that need only one stage.

pub mod annotate;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod merge;
pub mod pattern;
pub mod schema;
pub mod settings;
pub mod split;

#[cfg(test)]
mod test_support;

pub use engine::{Resolution, apply_content, parse_page_config, resolve_block};
pub use error::{CodefenceError, Result};
pub use settings::Settings;
