//! Section parser: nested document to [`BlockConfig`].
//!
//! Parsing is total. A section that is missing or is not a mapping parses
//! to an all-absent record, and values that cannot be coerced are absent.
//! Unknown keys are ignored here; they are reported by the schema check.

use super::coerce::{to_bool, to_count, to_lower, to_number, to_pair, to_string};
use super::model::*;
use super::types::{self, aliases_for};
use serde_yaml::{Mapping, Value};

impl BlockConfig {
    /// Parse a nested document into a configuration tree.
    pub fn from_document(doc: &Value) -> Self {
        let Some(root) = as_mapping(Some(doc)) else {
            return Self::default();
        };

        Self {
            meta: parse_meta(as_mapping(root.get(types::META))),
            display: parse_display(as_mapping(root.get(types::DISPLAY))),
            filter: parse_filter(as_mapping(root.get(types::FILTER))),
            annotations: parse_annotations(as_mapping(root.get(types::ANNOTATIONS))),
            pattern: to_string(root.get(types::PATTERN), None),
            styles: parse_styles(as_mapping(root.get(types::STYLES))),
        }
    }

    /// Parse configuration text (a preset body or a page default).
    ///
    /// Text that is not a valid document parses to an empty configuration.
    pub fn from_yaml_text(text: &str) -> Self {
        match serde_yaml::from_str::<Value>(text) {
            Ok(doc) => Self::from_document(&doc),
            Err(e) => {
                tracing::warn!(error = %e, "configuration text is not a valid document");
                Self::default()
            }
        }
    }
}

fn as_mapping(value: Option<&Value>) -> Option<&Mapping> {
    match value? {
        Value::Mapping(map) => Some(map),
        Value::Tagged(tagged) => as_mapping(Some(&tagged.value)),
        _ => None,
    }
}

/// Look up `key` in `section`, consulting the alias table when the primary
/// spelling is absent or null.
fn get_with_aliases<'a>(map: &'a Mapping, section: &str, key: &str) -> Option<&'a Value> {
    let present = |value: &&Value| !value.is_null();
    map.get(key).filter(present).or_else(|| {
        aliases_for(section, key).find_map(|alias| map.get(alias).filter(present))
    })
}

/// Parse a range expression and validate it.
pub fn parse_range(value: Option<&Value>) -> Option<LineRange> {
    let (start, end) = to_pair(value)?;
    LineRange::new(start, end)
}

fn parse_meta(map: Option<&Mapping>) -> SourceSection {
    let Some(map) = map else {
        return SourceSection::default();
    };

    SourceSection {
        path: to_string(map.get("PATH"), None),
        title: to_string(map.get("TITLE"), None),
        description: to_string(map.get("DESC"), None),
        preset: to_string(map.get("PRESET"), None),
    }
}

fn parse_display(map: Option<&Mapping>) -> DisplaySection {
    let Some(map) = map else {
        return DisplaySection::default();
    };

    DisplaySection {
        fold: to_count(map.get("FOLD"), None),
        scroll: to_count(map.get("SCROLL"), None),
        zebra: to_bool(map.get("ZEBRA"), None),
        line_numbers: to_bool(map.get("LINES"), None),
        copy: to_bool(map.get("COPY"), None),
        style: to_lower(map.get("STYLE")),
        language: to_string(map.get("LANG"), None),
        join: to_string(map.get("JOIN"), None),
        join_alt: to_string(get_with_aliases(map, types::DISPLAY, "JOIN_ALT"), None),
        exclude: to_string(map.get("EXCLUDE"), None),
        print: to_lower(map.get("PRINT")),
    }
}

fn parse_filter(map: Option<&Mapping>) -> FilterSection {
    let Some(map) = map else {
        return FilterSection::default();
    };

    let lines = match as_mapping(map.get("LINES")) {
        Some(lines) => RangeFilter {
            range: parse_range(lines.get("RANGE")),
            inclusive: to_bool(lines.get("INCLUSIVE"), None),
        },
        None => RangeFilter::default(),
    };

    let marks = match as_mapping(map.get("MARKS")) {
        Some(marks) => MarkerFilter {
            start: to_string(marks.get("START"), None),
            end: to_string(marks.get("END"), None),
            inclusive: to_bool(marks.get("INCLUSIVE"), None),
        },
        None => MarkerFilter::default(),
    };

    FilterSection { lines, marks }
}

fn parse_annotations(map: Option<&Mapping>) -> AnnotationSection {
    let Some(map) = map else {
        return AnnotationSection::default();
    };

    // Items that are not themselves mappings are dropped silently.
    let items = match map.get("ITEMS") {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| as_mapping(Some(item)))
            .map(parse_annotation_entry)
            .collect(),
        _ => Vec::new(),
    };

    AnnotationSection {
        mode: to_lower(map.get("MODE")),
        print_mode: to_lower(map.get("PRINT_MODE")),
        variant: to_lower(map.get("VARIANT")),
        items,
    }
}

fn parse_annotation_entry(map: &Mapping) -> AnnotationEntry {
    AnnotationEntry {
        line: to_number(map.get("LINE"), None),
        mark: to_string(map.get("MARK"), None),
        lines: parse_range(map.get("LINES")),
        text: to_string(map.get("TEXT"), None),
        replace: to_bool(map.get("REPLACE"), None),
        mode: to_lower(map.get("MODE")),
        kind: to_string(map.get("TYPE"), None),
    }
}

fn parse_styles(map: Option<&Mapping>) -> StyleSection {
    let Some(map) = map else {
        return StyleSection::default();
    };

    StyleSection {
        prompt: parse_text_style(as_mapping(map.get("PROMPT"))),
        command: parse_text_style(as_mapping(map.get("COMMAND"))),
        output: parse_text_style(as_mapping(map.get("OUTPUT"))),
    }
}

fn parse_text_style(map: Option<&Mapping>) -> TextStyle {
    let Some(map) = map else {
        return TextStyle::default();
    };

    TextStyle {
        color: to_string(map.get("COLOR"), None),
        bold: to_bool(map.get("BOLD"), None),
        italic: to_bool(map.get("ITALIC"), None),
    }
}
