//! Settings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Global defaults, the bottom layer of every resolution.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplayDefaults,
    pub annotations: AnnotationDefaults,
}

/// Fallback for every `DISPLAY` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    // =========================================================================
    // Layout
    // =========================================================================
    /// Fold threshold in lines (0 disables folding).
    pub fold: u32,

    /// Scroll threshold in lines (0 disables scrolling).
    pub scroll: u32,

    /// Alternate row shading.
    pub zebra: bool,

    /// Show line numbers.
    #[serde(default = "default_true")]
    pub line_numbers: bool,

    /// Offer a copy action.
    #[serde(default = "default_true")]
    pub copy: bool,

    // =========================================================================
    // Appearance
    // =========================================================================
    /// Visual style name (lower-case).
    #[serde(default = "default_style")]
    pub style: String,

    /// Language tag used when a block names none.
    pub language: String,

    /// Line-join operator.
    #[serde(default = "default_join")]
    pub join: String,

    /// Alternate line-join operator.
    #[serde(default = "default_join_alt")]
    pub join_alt: String,

    /// Regex of lines to hide (empty hides nothing).
    pub exclude: String,

    /// Print behavior name (lower-case).
    #[serde(default = "default_print")]
    pub print: String,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            fold: 0,
            scroll: 0,
            zebra: false,
            line_numbers: default_true(),
            copy: default_true(),
            style: default_style(),
            language: String::new(),
            join: default_join(),
            join_alt: default_join_alt(),
            exclude: String::new(),
            print: default_print(),
        }
    }
}

/// Fallback for the `ANNOTATIONS` section scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationDefaults {
    /// Placement mode when neither the entry nor the section names one.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Placement mode used when printing. Unset follows each entry's
    /// effective placement mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_mode: Option<String>,

    /// Visual variant.
    #[serde(default = "default_variant")]
    pub variant: String,
}

impl Default for AnnotationDefaults {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            print_mode: None,
            variant: default_variant(),
        }
    }
}
