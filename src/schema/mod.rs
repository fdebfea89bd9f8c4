//! Schema check for configuration documents.
//!
//! Parsing is forgiving: unknown keys are ignored and bad values become
//! absent. This module is the strict counterpart. It walks the raw
//! document and reports what the parser would silently drop or
//! reinterpret:
//! - unknown sections and keys
//! - values of the wrong shape (non-mapping sections, non-scalar strings)
//! - unknown enumerated names
//! - invalid range expressions and regexes
//! - annotation items that cannot resolve (no target, no text)
//!
//! The check never changes how a block resolves.

mod check;
mod types;


// Re-export public API
pub use check::check_document;
pub use types::{Diagnostic, SchemaReport, Severity};
