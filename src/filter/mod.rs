//! Filter chain: narrows block content in two stages.
//!
//! 1. Range: keep a 1-based line window. Always succeeds.
//! 2. Markers: keep the lines between a start and an end marker. Runs on
//!    the output of stage 1, so a window that excludes the markers fails
//!    with "start marker not found".

mod markers;
mod range;
mod types;


// Re-export public API
pub use markers::{apply_markers, extract_markers};
pub use range::{apply_range, extract_range};
pub use types::{FilterError, FilterPlan, FilterResult, MarkerStage, RangeStage};

/// Run every enabled stage of `plan` over `content`.
pub fn apply(content: &str, plan: &FilterPlan) -> FilterResult {
    let content = match &plan.range {
        Some(stage) => apply_range(content, stage),
        None => content.to_string(),
    };

    match &plan.markers {
        Some(stage) => apply_markers(&content, stage).inspect_err(|e| {
            tracing::debug!(error = %e, "marker filter failed");
        }),
        None => Ok(content),
    }
}
