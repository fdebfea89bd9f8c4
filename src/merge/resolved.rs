//! Default substitution: merged tree to resolved configuration.

use crate::config::{AnnotationEntry, BlockConfig, SourceSection, TextStyle};
use crate::filter::FilterPlan;
use crate::settings::Settings;
use serde::Serialize;

/// The final configuration handed to rendering.
///
/// Every field that drives rendering has a concrete value; the source
/// metadata, the pattern and the annotation print mode stay optional
/// because "none" is meaningful there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub meta: SourceSection,
    pub display: ResolvedDisplay,
    pub filter: FilterPlan,
    pub annotations: ResolvedAnnotations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub styles: ResolvedStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDisplay {
    pub fold: u32,
    pub scroll: u32,
    pub zebra: bool,
    pub line_numbers: bool,
    pub copy: bool,
    pub style: String,
    pub language: String,
    pub join: String,
    pub join_alt: String,
    pub exclude: String,
    pub print: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAnnotations {
    pub mode: String,
    /// Unset means each entry prints with its effective placement mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_mode: Option<String>,
    pub variant: String,
    pub items: Vec<AnnotationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyles {
    pub prompt: ResolvedTextStyle,
    pub command: ResolvedTextStyle,
    pub output: ResolvedTextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl From<TextStyle> for ResolvedTextStyle {
    fn from(style: TextStyle) -> Self {
        Self {
            color: style.color,
            bold: style.bold.unwrap_or(false),
            italic: style.italic.unwrap_or(false),
        }
    }
}

impl ResolvedConfig {
    /// Fill every field still absent after merging from `settings`.
    pub fn resolve(merged: BlockConfig, settings: &Settings) -> Self {
        let defaults = &settings.display;
        let display = merged.display;
        let annotations = merged.annotations;

        Self {
            meta: merged.meta,
            display: ResolvedDisplay {
                fold: display.fold.unwrap_or(defaults.fold),
                scroll: display.scroll.unwrap_or(defaults.scroll),
                zebra: display.zebra.unwrap_or(defaults.zebra),
                line_numbers: display.line_numbers.unwrap_or(defaults.line_numbers),
                copy: display.copy.unwrap_or(defaults.copy),
                style: display.style.unwrap_or_else(|| defaults.style.clone()),
                language: display.language.unwrap_or_else(|| defaults.language.clone()),
                join: display.join.unwrap_or_else(|| defaults.join.clone()),
                join_alt: display.join_alt.unwrap_or_else(|| defaults.join_alt.clone()),
                exclude: display.exclude.unwrap_or_else(|| defaults.exclude.clone()),
                print: display.print.unwrap_or_else(|| defaults.print.clone()),
            },
            filter: FilterPlan::from_section(&merged.filter),
            annotations: ResolvedAnnotations {
                mode: annotations
                    .mode
                    .unwrap_or_else(|| settings.annotations.mode.clone()),
                print_mode: annotations
                    .print_mode
                    .or_else(|| settings.annotations.print_mode.clone()),
                variant: annotations
                    .variant
                    .unwrap_or_else(|| settings.annotations.variant.clone()),
                items: annotations.items,
            },
            pattern: merged.pattern,
            styles: ResolvedStyles {
                prompt: merged.styles.prompt.into(),
                command: merged.styles.command.into(),
                output: merged.styles.output.into(),
            },
        }
    }
}
