//! Annotation resolver: maps annotation targets onto filtered content.
//!
//! Target kinds, highest precedence first:
//! - `LINE`: an explicit 1-based line number
//! - `MARK`: the first line containing a substring (case-sensitive)
//! - `LINES`: every line of a range expression
//!
//! Entries without text, or whose target matches no line, are dropped
//! without affecting the others. Output order is input order.

mod target;
mod types;

#[cfg(test)]
mod tests;

use crate::config::types::DEFAULT_PLACEMENT_MODE;
use crate::merge::ResolvedAnnotations;

// Re-export public API
pub use target::{TargetKind, resolve_target, target_kind};
pub use types::ResolvedAnnotation;

/// Resolve every annotation entry against the final `content`.
///
/// Only entries that resolve to at least one line are returned.
pub fn resolve_annotations(section: &ResolvedAnnotations, content: &str) -> Vec<ResolvedAnnotation> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut resolved = Vec::new();

    for (index, entry) in section.items.iter().enumerate() {
        let Some(text) = entry.text.as_deref().filter(|text| !text.is_empty()) else {
            tracing::debug!(index, "annotation has no text, skipping");
            continue;
        };

        let targets = resolve_target(entry, &lines);
        if targets.is_empty() {
            tracing::debug!(index, kind = ?target_kind(entry), "annotation target did not resolve");
            continue;
        }

        let mode = entry
            .mode
            .as_deref()
            .filter(|mode| !mode.is_empty())
            .or(Some(section.mode.as_str()).filter(|mode| !mode.is_empty()))
            .unwrap_or(DEFAULT_PLACEMENT_MODE)
            .to_string();
        let print_mode = section
            .print_mode
            .clone()
            .filter(|print_mode| !print_mode.is_empty())
            .unwrap_or_else(|| mode.clone());

        resolved.push(ResolvedAnnotation {
            lines: targets,
            text: text.to_string(),
            replace: entry.replace.unwrap_or(false),
            mode,
            print_mode,
            variant: section.variant.clone(),
            kind: entry.kind.clone(),
        });
    }

    resolved
}
