//! Merge resolver: combines preset, page, and block layers.
//!
//! Precedence, lowest to highest:
//! 1. the named preset (block reference first, then the page's)
//! 2. the page-level default configuration
//! 3. the block's own configuration
//!
//! Fields merge one at a time: a present value in a higher layer wins and
//! an absent one falls through. Filter stages and the three pattern
//! sub-styles merge independently; the annotation item list is replaced
//! wholesale. Preset references never survive a merge.

mod layers;
mod presets;
mod resolved;


// Re-export public API
pub use layers::{Overlay, merge_layers};
pub use presets::{PresetLookup, PresetStore};
pub use resolved::{
    ResolvedAnnotations, ResolvedConfig, ResolvedDisplay, ResolvedStyles, ResolvedTextStyle,
};
