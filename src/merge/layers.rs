//! Layer merging.

use super::presets::PresetLookup;
use crate::config::{
    AnnotationSection, BlockConfig, DisplaySection, FilterSection, MarkerFilter, RangeFilter,
    SourceSection, StyleSection, TextStyle,
};

/// A configuration record that can be laid over a lower layer.
pub trait Overlay {
    /// Merge `higher` onto `self`, returning the combined record.
    fn overlay(self, higher: Self) -> Self;
}

impl Overlay for BlockConfig {
    fn overlay(self, higher: Self) -> Self {
        Self {
            meta: self.meta.overlay(higher.meta),
            display: self.display.overlay(higher.display),
            filter: self.filter.overlay(higher.filter),
            annotations: self.annotations.overlay(higher.annotations),
            pattern: higher.pattern.or(self.pattern),
            styles: self.styles.overlay(higher.styles),
        }
    }
}

impl Overlay for SourceSection {
    fn overlay(self, higher: Self) -> Self {
        Self {
            path: higher.path.or(self.path),
            title: higher.title.or(self.title),
            description: higher.description.or(self.description),
            preset: higher.preset.or(self.preset),
        }
    }
}

impl Overlay for DisplaySection {
    fn overlay(self, higher: Self) -> Self {
        Self {
            fold: higher.fold.or(self.fold),
            scroll: higher.scroll.or(self.scroll),
            zebra: higher.zebra.or(self.zebra),
            line_numbers: higher.line_numbers.or(self.line_numbers),
            copy: higher.copy.or(self.copy),
            style: higher.style.or(self.style),
            language: higher.language.or(self.language),
            join: higher.join.or(self.join),
            join_alt: higher.join_alt.or(self.join_alt),
            exclude: higher.exclude.or(self.exclude),
            print: higher.print.or(self.print),
        }
    }
}

impl Overlay for FilterSection {
    fn overlay(self, higher: Self) -> Self {
        Self {
            lines: self.lines.overlay(higher.lines),
            marks: self.marks.overlay(higher.marks),
        }
    }
}

impl Overlay for RangeFilter {
    fn overlay(self, higher: Self) -> Self {
        Self {
            range: higher.range.or(self.range),
            inclusive: higher.inclusive.or(self.inclusive),
        }
    }
}

impl Overlay for MarkerFilter {
    fn overlay(self, higher: Self) -> Self {
        Self {
            start: higher.start.or(self.start),
            end: higher.end.or(self.end),
            inclusive: higher.inclusive.or(self.inclusive),
        }
    }
}

impl Overlay for AnnotationSection {
    fn overlay(self, higher: Self) -> Self {
        // The item list is atomic: any items in the higher layer replace
        // the lower layer's items entirely.
        let items = if higher.items.is_empty() {
            self.items
        } else {
            higher.items
        };

        Self {
            mode: higher.mode.or(self.mode),
            print_mode: higher.print_mode.or(self.print_mode),
            variant: higher.variant.or(self.variant),
            items,
        }
    }
}

impl Overlay for StyleSection {
    fn overlay(self, higher: Self) -> Self {
        Self {
            prompt: self.prompt.overlay(higher.prompt),
            command: self.command.overlay(higher.command),
            output: self.output.overlay(higher.output),
        }
    }
}

impl Overlay for TextStyle {
    fn overlay(self, higher: Self) -> Self {
        Self {
            color: higher.color.or(self.color),
            bold: higher.bold.or(self.bold),
            italic: higher.italic.or(self.italic),
        }
    }
}

/// Merge a block's configuration with its preset and page layers.
///
/// Algorithm:
/// 1. The block's preset reference wins over the page's.
/// 2. A known preset is parsed into the base layer; an unknown one is an
///    empty base.
/// 3. The page layer (with its preset reference removed) overrides the base.
/// 4. The block overrides everything.
///
/// When neither a preset nor a page layer is available the block is
/// returned as is, without fabricating empty sections. In every case the
/// result carries no preset reference.
pub fn merge_layers<P>(block: &BlockConfig, presets: &P, page: Option<&BlockConfig>) -> BlockConfig
where
    P: PresetLookup + ?Sized,
{
    let preset_name = block
        .meta
        .preset
        .as_deref()
        .or_else(|| page.and_then(|p| p.meta.preset.as_deref()));

    let preset = preset_name.and_then(|name| match presets.preset_source(name) {
        Some(source) => {
            tracing::debug!(preset = name, "applying preset");
            Some(BlockConfig::from_yaml_text(source))
        }
        None => {
            tracing::debug!(preset = name, "preset not found, using empty base layer");
            None
        }
    });

    if preset.is_none() && page.is_none() {
        let mut unchanged = block.clone();
        unchanged.meta.preset = None;
        return unchanged;
    }

    let mut merged = preset.unwrap_or_default();

    if let Some(page) = page {
        let mut page = page.clone();
        page.meta.preset = None;
        merged = merged.overlay(page);
    }

    merged = merged.overlay(block.clone());
    merged.meta.preset = None;
    merged
}
