//! Block configuration: the parsed tree and the section parser.
//!
//! A block's configuration prelude is a YAML document with up to six
//! top-level keys (`META`, `DISPLAY`, `FILTER`, `ANNOTATIONS`, `PATTERN`,
//! `STYLES`). Parsing normalizes value types and case, never fails, and
//! keeps every field optional so the merge resolver can tell "absent"
//! apart from "false".

pub mod coerce;
mod model;
mod parse;
pub mod types;


// Re-export public API
pub use model::{
    AnnotationEntry, AnnotationSection, BlockConfig, DisplaySection, FilterSection, LineRange,
    MarkerFilter, RangeFilter, SourceSection, StyleSection, TextStyle,
};
pub use parse::parse_range;
