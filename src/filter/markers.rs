//! Stage 2: marker-delimited extraction.

use super::types::{FilterError, FilterResult, MarkerStage};

/// Extract the lines between the first line containing `start` and the
/// nearest following line containing `end`.
///
/// Inclusive extraction keeps both marker lines verbatim. Exclusive
/// extraction drops them and trims fully blank lines from the edges of
/// what remains.
pub fn extract_markers(content: &str, start: &str, end: &str, inclusive: bool) -> FilterResult {
    if start.is_empty() || end.is_empty() {
        return Err(FilterError::EmptyMarker);
    }

    let lines: Vec<&str> = content.split('\n').collect();

    let start_idx = lines
        .iter()
        .position(|line| line.contains(start))
        .ok_or_else(|| FilterError::StartMarkerNotFound(start.to_string()))?;

    let end_idx = lines[start_idx + 1..]
        .iter()
        .position(|line| line.contains(end))
        .map(|offset| start_idx + 1 + offset)
        .ok_or_else(|| FilterError::EndMarkerNotFound(end.to_string()))?;

    if inclusive {
        return Ok(lines[start_idx..=end_idx].join("\n"));
    }

    let mut inner = &lines[start_idx + 1..end_idx];
    while let [first, rest @ ..] = inner {
        if !first.trim().is_empty() {
            break;
        }
        inner = rest;
    }
    while let [rest @ .., last] = inner {
        if !last.trim().is_empty() {
            break;
        }
        inner = rest;
    }

    Ok(inner.join("\n"))
}

/// Apply a marker stage.
pub fn apply_markers(content: &str, stage: &MarkerStage) -> FilterResult {
    extract_markers(content, &stage.start, &stage.end, stage.inclusive)
}
