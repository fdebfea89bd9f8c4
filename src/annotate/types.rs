//! Resolved annotation types.

use serde::Serialize;

/// An annotation attached to concrete lines of the final content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAnnotation {
    /// 1-based line numbers in the filtered content.
    pub lines: Vec<usize>,
    pub text: String,
    pub replace: bool,
    /// Effective placement mode.
    pub mode: String,
    /// Effective placement mode when printing.
    pub print_mode: String,
    pub variant: String,
    /// Category tag (`TYPE`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ResolvedAnnotation {
    /// Whether the target matched at least one line.
    pub fn is_resolved(&self) -> bool {
        !self.lines.is_empty()
    }

    /// The first targeted line.
    pub fn first_line(&self) -> Option<usize> {
        self.lines.first().copied()
    }
}
