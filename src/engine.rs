//! Top-level resolution of one raw block.
//!
//! Composes the splitter, section parser, merge resolver, default
//! substitution, filter chain and annotation resolver. Nothing here does
//! I/O or keeps state between calls.

use crate::annotate::{ResolvedAnnotation, resolve_annotations};
use crate::config::BlockConfig;
use crate::filter::{self, FilterResult};
use crate::merge::{PresetLookup, ResolvedConfig, merge_layers};
use crate::settings::Settings;
use crate::split::split_block;
use serde::Serialize;

/// Everything the renderer needs for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    /// Filtered content, or the message to show in place of the block.
    pub content: FilterResult,
    /// Empty when filtering failed.
    pub annotations: Vec<ResolvedAnnotation>,
    /// False for configuration-only blocks, whose content comes from
    /// elsewhere (see [`apply_content`]).
    pub has_body: bool,
}

/// Serializable view of a [`Resolution`] for the `--json` output.
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    pub config: &'a ResolvedConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub annotations: &'a [ResolvedAnnotation],
    pub has_body: bool,
}

impl Resolution {
    pub fn report(&self) -> ResolutionReport<'_> {
        let (content, error) = match &self.content {
            Ok(content) => (Some(content.as_str()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        ResolutionReport {
            config: &self.config,
            content,
            error,
            annotations: &self.annotations,
            has_body: self.has_body,
        }
    }
}

/// Resolve a raw block against the preset store, an optional page layer
/// and the global defaults.
///
/// Never fails. A filter failure is carried in [`Resolution::content`].
pub fn resolve_block<P>(
    raw: &str,
    presets: &P,
    page: Option<&BlockConfig>,
    settings: &Settings,
) -> Resolution
where
    P: PresetLookup + ?Sized,
{
    let split = split_block(raw);
    let block = BlockConfig::from_document(&split.document);
    let merged = merge_layers(&block, presets, page);
    let config = ResolvedConfig::resolve(merged, settings);

    let (content, annotations) = if split.has_body {
        apply_content(&config, &split.body)
    } else {
        (Ok(String::new()), Vec::new())
    };

    Resolution {
        config,
        content,
        annotations,
        has_body: split.has_body,
    }
}

/// Run the filter chain over `content`, then resolve annotations against
/// the filtered text.
///
/// Used directly for configuration-only blocks once the caller has loaded
/// the content they point at.
pub fn apply_content(
    config: &ResolvedConfig,
    content: &str,
) -> (FilterResult, Vec<ResolvedAnnotation>) {
    match filter::apply(content, &config.filter) {
        Ok(filtered) => {
            let annotations = resolve_annotations(&config.annotations, &filtered);
            (Ok(filtered), annotations)
        }
        Err(e) => (Err(e), Vec::new()),
    }
}

/// Parse a page default block into a page-level layer.
///
/// Any body after the separator is ignored.
pub fn parse_page_config(raw: &str) -> BlockConfig {
    BlockConfig::from_document(&split_block(raw).document)
}
