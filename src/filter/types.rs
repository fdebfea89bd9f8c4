//! Filter stages and their failures.

use crate::config::{FilterSection, LineRange};
use serde::Serialize;
use thiserror::Error;

/// Outcome of the filter chain: the final content, or why there is none.
pub type FilterResult = std::result::Result<String, FilterError>;

/// Author-correctable failures of the marker stage.
///
/// The `Display` text is shown in place of the rendered block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("start and end markers must be non-empty")]
    EmptyMarker,

    #[error("start marker not found: '{0}'")]
    StartMarkerNotFound(String),

    #[error("end marker not found: '{0}'")]
    EndMarkerNotFound(String),
}

/// Line-window stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeStage {
    pub range: LineRange,
    pub inclusive: bool,
}

/// Marker-delimited stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStage {
    pub start: String,
    pub end: String,
    pub inclusive: bool,
}

/// The enabled stages of a resolved filter section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<MarkerStage>,
}

impl FilterPlan {
    /// Resolve a merged filter section into its enabled stages.
    ///
    /// The range stage needs a valid range. The marker stage is enabled by
    /// either marker; a missing counterpart becomes the empty string so the
    /// stage reports it instead of silently doing nothing. Inclusivity
    /// defaults to `true` for both stages.
    pub fn from_section(section: &FilterSection) -> Self {
        let range = section.lines.range.map(|range| RangeStage {
            range,
            inclusive: section.lines.inclusive.unwrap_or(true),
        });

        let marks = &section.marks;
        let markers = if marks.start.is_some() || marks.end.is_some() {
            Some(MarkerStage {
                start: marks.start.clone().unwrap_or_default(),
                end: marks.end.clone().unwrap_or_default(),
                inclusive: marks.inclusive.unwrap_or(true),
            })
        } else {
            None
        };

        Self { range, markers }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none() && self.markers.is_none()
    }
}
