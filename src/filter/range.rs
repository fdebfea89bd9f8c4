//! Stage 1: line-window extraction.

use super::types::RangeStage;

/// Extract the 1-based inclusive line window `[start, end]`.
///
/// Bounds are clamped to the content. A window that is empty after
/// clamping yields an empty string, never an error.
pub fn extract_range(content: &str, start: usize, end: usize) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let start = start.max(1);
    let end = end.min(lines.len());

    if start > end {
        return String::new();
    }

    lines[start - 1..end].join("\n")
}

/// Apply a range stage. An exclusive window drops one line on each side
/// before clamping.
pub fn apply_range(content: &str, stage: &RangeStage) -> String {
    let (start, end) = if stage.inclusive {
        (stage.range.start, stage.range.end)
    } else {
        (
            stage.range.start.saturating_add(1),
            stage.range.end.saturating_sub(1),
        )
    };

    extract_range(content, start, end)
}
