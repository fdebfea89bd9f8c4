//! Target resolution for a single annotation entry.

use crate::config::AnnotationEntry;

/// Which kind of target an entry resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Line,
    Mark,
    Lines,
}

/// The highest-precedence target kind present: LINE > MARK > LINES.
pub fn target_kind(entry: &AnnotationEntry) -> Option<TargetKind> {
    if entry.line.is_some() {
        Some(TargetKind::Line)
    } else if entry.mark.is_some() {
        Some(TargetKind::Mark)
    } else if entry.lines.is_some() {
        Some(TargetKind::Lines)
    } else {
        None
    }
}

/// Resolve an entry's target to 1-based line numbers in `lines`.
///
/// Only the highest-precedence target kind is consulted; a miss there
/// resolves to no lines rather than falling back to a lower kind. An empty
/// `MARK` never matches.
pub fn resolve_target(entry: &AnnotationEntry, lines: &[&str]) -> Vec<usize> {
    let total = lines.len();

    match target_kind(entry) {
        Some(TargetKind::Line) => entry
            .line
            .and_then(|line| usize::try_from(line).ok())
            .filter(|line| (1..=total).contains(line))
            .into_iter()
            .collect(),
        Some(TargetKind::Mark) => entry
            .mark
            .as_deref()
            .filter(|mark| !mark.is_empty())
            .and_then(|mark| lines.iter().position(|line| line.contains(mark)))
            .map(|idx| idx + 1)
            .into_iter()
            .collect(),
        Some(TargetKind::Lines) => entry
            .lines
            .map(|range| (range.start..=range.end.min(total)).collect())
            .unwrap_or_default(),
        None => Vec::new(),
    }
}
