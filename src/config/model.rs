//! Parsed configuration tree.
//!
//! Every field is independently optional: `None` means "not declared at
//! this layer" and is what the merge resolver falls through on. Absent is
//! never the same thing as `false` or `0`.

use serde::Serialize;

/// The parsed configuration of one block, preset, or page default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockConfig {
    pub meta: SourceSection,
    pub display: DisplaySection,
    pub filter: FilterSection,
    pub annotations: AnnotationSection,
    /// Two-capture-group pattern for captured output blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub styles: StyleSection,
}

/// `META`: where the block came from and how it is titled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

/// `DISPLAY`: presentation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplaySection {
    /// Fold threshold in lines, 0 disables folding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zebra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<bool>,
    /// Lower-cased style name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Lower-cased print behavior name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print: Option<String>,
}

/// `FILTER`: the two independently optional stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSection {
    pub lines: RangeFilter,
    pub marks: MarkerFilter,
}

/// `FILTER.LINES`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<LineRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

/// `FILTER.MARKS`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

/// A validated 1-based line range: `start > 0` and `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Build a range, rejecting `start == 0` and `end < start`.
    pub fn new(start: i64, end: i64) -> Option<Self> {
        if start <= 0 || end < start {
            return None;
        }
        Some(Self {
            start: usize::try_from(start).ok()?,
            end: usize::try_from(end).ok()?,
        })
    }
}

/// `ANNOTATIONS`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationSection {
    /// Lower-cased default placement mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Replaced wholesale by a higher layer that declares any items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<AnnotationEntry>,
}

/// One entry of `ANNOTATIONS.ITEMS`.
///
/// All target kinds are preserved as written; the LINE > MARK > LINES
/// precedence is applied only when the entry is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<LineRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// `STYLES`: one sub-style per captured piece of `PATTERN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSection {
    pub prompt: TextStyle,
    pub command: TextStyle,
    pub output: TextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}
