//! Core types for schema check results and diagnostics.

use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The value is ignored or replaced by a lower layer.
    Error,
    /// The value is kept but probably not what the author meant.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single problem found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Dotted key path, e.g. `ANNOTATIONS.ITEMS[2].LINES`.
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Result of a schema check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl SchemaReport {
    /// True when there are no errors. Warnings do not fail a check.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Format the report, one diagnostic per line.
    ///
    /// ```text
    /// error: DISPLAY.FOLDS: unknown key
    /// warning: DISPLAY.STYLE: unknown style name 'neon'
    /// ```
    pub fn format_report(&self) -> String {
        let mut msg = String::new();

        for d in &self.diagnostics {
            msg.push_str(&format!("{}: {}: {}\n", d.severity, d.path, d.message));
        }

        msg
    }
}
