//! Schema walk over a raw configuration document.

use super::types::{Diagnostic, SchemaReport};
use crate::config::coerce::{to_count, to_lower, to_number, to_pair, to_string};
use crate::config::types::*;
use crate::config::parse_range;
use crate::pattern::CapturePattern;
use serde_yaml::{Mapping, Value};

/// Check a configuration document and report every problem found.
///
/// A `null` document (no configuration) passes.
pub fn check_document(doc: &Value) -> SchemaReport {
    let mut report = SchemaReport::default();

    let root = match doc {
        Value::Null => return report,
        Value::Mapping(root) => root,
        _ => {
            report
                .diagnostics
                .push(Diagnostic::error("", "configuration must be a mapping"));
            return report;
        }
    };

    let out = &mut report.diagnostics;
    for (key, value) in root {
        let Some(name) = key.as_str() else {
            out.push(Diagnostic::error("", "section keys must be strings"));
            continue;
        };

        match name {
            META => {
                if let Some(map) = section(out, META, value, META_KEYS) {
                    check_strings(out, META, map, META_KEYS);
                }
            }
            DISPLAY => {
                if let Some(map) = section(out, DISPLAY, value, DISPLAY_KEYS) {
                    check_display(out, map);
                }
            }
            FILTER => {
                if let Some(map) = section(out, FILTER, value, FILTER_KEYS) {
                    check_filter(out, map);
                }
            }
            ANNOTATIONS => {
                if let Some(map) = section(out, ANNOTATIONS, value, ANNOTATION_KEYS) {
                    check_annotations(out, map);
                }
            }
            PATTERN => check_pattern(out, value),
            STYLES => {
                if let Some(map) = section(out, STYLES, value, STYLE_KEYS) {
                    check_styles(out, map);
                }
            }
            other => out.push(Diagnostic::error(other, "unknown section")),
        }
    }

    report
}

/// Require `value` to be a mapping and report keys outside `known`.
fn section<'a>(
    out: &mut Vec<Diagnostic>,
    path: &str,
    value: &'a Value,
    known: &[&str],
) -> Option<&'a Mapping> {
    let Value::Mapping(map) = value else {
        if !value.is_null() {
            out.push(Diagnostic::error(path, "must be a mapping, ignored"));
        }
        return None;
    };

    for key in map.keys() {
        match key.as_str() {
            Some(name) if known.contains(&name) => {}
            Some(name) => out.push(Diagnostic::error(
                format!("{}.{}", path, name),
                "unknown key",
            )),
            None => out.push(Diagnostic::error(path, "keys must be strings")),
        }
    }

    Some(map)
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn check_strings(out: &mut Vec<Diagnostic>, path: &str, map: &Mapping, keys: &[&str]) {
    for key in keys {
        if let Some(value) = map.get(*key)
            && !value.is_null()
            && !is_scalar(value)
        {
            out.push(Diagnostic::error(
                format!("{}.{}", path, key),
                "must be a scalar value",
            ));
        }
    }
}

fn check_bool(out: &mut Vec<Diagnostic>, path: &str, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(Value::String(s)) if s == "true" || s == "false" => {}
        Some(_) => out.push(Diagnostic::warning(
            path,
            "is not a boolean and is treated as false (use true or false)",
        )),
    }
}

fn check_count(out: &mut Vec<Diagnostic>, path: &str, value: Option<&Value>) {
    if let Some(value) = value
        && !value.is_null()
        && to_count(Some(value), None).is_none()
    {
        out.push(Diagnostic::error(
            path,
            "must be a non-negative integer, value ignored",
        ));
    }
}

fn check_enum(
    out: &mut Vec<Diagnostic>,
    path: &str,
    value: Option<&Value>,
    what: &str,
    known: &[&str],
) {
    let Some(value) = value else {
        return;
    };
    let Some(name) = to_lower(Some(value)) else {
        return;
    };
    if !known.contains(&name.as_str()) {
        out.push(Diagnostic::warning(
            path,
            format!(
                "unknown {} '{}' (expected one of: {})",
                what,
                name,
                known.join(", ")
            ),
        ));
    }
}

fn check_range(out: &mut Vec<Diagnostic>, path: &str, value: Option<&Value>) {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return;
    };
    if parse_range(Some(value)).is_none() {
        let detail = match to_pair(Some(value)) {
            Some((start, end)) => format!("invalid range {},{} (need start > 0 and end >= start)", start, end),
            None => "must be [start, end] or \"start,end\"".to_string(),
        };
        out.push(Diagnostic::error(path, detail));
    }
}

fn check_regex(out: &mut Vec<Diagnostic>, path: &str, value: Option<&Value>) {
    let Some(pattern) = to_string(value, None) else {
        return;
    };
    if pattern.is_empty() {
        return;
    }
    if let Err(e) = regex::Regex::new(&pattern) {
        out.push(Diagnostic::error(path, format!("invalid regex: {}", e)));
    }
}

fn check_display(out: &mut Vec<Diagnostic>, map: &Mapping) {
    let path = |key: &str| format!("{}.{}", DISPLAY, key);

    check_count(out, &path("FOLD"), map.get("FOLD"));
    check_count(out, &path("SCROLL"), map.get("SCROLL"));
    for key in ["ZEBRA", "LINES", "COPY"] {
        check_bool(out, &path(key), map.get(key));
    }
    check_strings(out, DISPLAY, map, &["LANG", "JOIN", "JOIN_ALT", "JOIN_OR"]);
    check_enum(out, &path("STYLE"), map.get("STYLE"), "style name", STYLE_NAMES);
    check_enum(out, &path("PRINT"), map.get("PRINT"), "print behavior", PRINT_BEHAVIORS);
    check_regex(out, &path("EXCLUDE"), map.get("EXCLUDE"));

    for (sec, alias, primary) in KEY_ALIASES {
        let is_set = |key: &str| map.get(key).is_some_and(|v| !v.is_null());
        if *sec == DISPLAY && is_set(*alias) && is_set(*primary) {
            out.push(Diagnostic::warning(
                path(*alias),
                format!("ignored because {} is also set", primary),
            ));
        }
    }
}

fn check_filter(out: &mut Vec<Diagnostic>, map: &Mapping) {
    let lines_path = format!("{}.LINES", FILTER);
    if let Some(value) = map.get("LINES")
        && let Some(lines) = section(out, &lines_path, value, RANGE_FILTER_KEYS)
    {
        check_range(out, &format!("{}.RANGE", lines_path), lines.get("RANGE"));
        check_bool(out, &format!("{}.INCLUSIVE", lines_path), lines.get("INCLUSIVE"));
    }

    let marks_path = format!("{}.MARKS", FILTER);
    if let Some(value) = map.get("MARKS")
        && let Some(marks) = section(out, &marks_path, value, MARKER_FILTER_KEYS)
    {
        check_strings(out, &marks_path, marks, &["START", "END"]);
        check_bool(out, &format!("{}.INCLUSIVE", marks_path), marks.get("INCLUSIVE"));
        for key in ["START", "END"] {
            let key_path = format!("{}.{}", marks_path, key);
            match marks.get(key) {
                None | Some(Value::Null) => out.push(Diagnostic::warning(
                    key_path,
                    "not set, another layer must supply it",
                )),
                Some(Value::String(s)) if s.is_empty() => {
                    out.push(Diagnostic::error(key_path, "marker must be non-empty"))
                }
                Some(_) => {}
            }
        }
    }
}

fn check_annotations(out: &mut Vec<Diagnostic>, map: &Mapping) {
    let path = |key: &str| format!("{}.{}", ANNOTATIONS, key);

    check_enum(out, &path("MODE"), map.get("MODE"), "placement mode", PLACEMENT_MODES);
    check_enum(
        out,
        &path("PRINT_MODE"),
        map.get("PRINT_MODE"),
        "placement mode",
        PLACEMENT_MODES,
    );
    check_enum(out, &path("VARIANT"), map.get("VARIANT"), "variant", ANNOTATION_VARIANTS);

    let items = match map.get("ITEMS") {
        None | Some(Value::Null) => return,
        Some(Value::Sequence(items)) => items,
        Some(_) => {
            out.push(Diagnostic::error(path("ITEMS"), "must be a list, items ignored"));
            return;
        }
    };

    for (idx, item) in items.iter().enumerate() {
        let item_path = format!("{}.ITEMS[{}]", ANNOTATIONS, idx);
        let Some(entry) = section(out, &item_path, item, ANNOTATION_ITEM_KEYS) else {
            if item.is_null() {
                out.push(Diagnostic::error(&item_path, "must be a mapping, item ignored"));
            }
            continue;
        };
        check_annotation_item(out, &item_path, entry);
    }
}

fn check_annotation_item(out: &mut Vec<Diagnostic>, path: &str, entry: &Mapping) {
    let key_path = |key: &str| format!("{}.{}", path, key);

    let has_line = match entry.get("LINE") {
        None | Some(Value::Null) => false,
        Some(value) => {
            if to_number(Some(value), None).is_none() {
                out.push(Diagnostic::error(key_path("LINE"), "must be a line number"));
            }
            true
        }
    };
    let has_mark = match entry.get("MARK") {
        None | Some(Value::Null) => false,
        Some(value) => {
            if to_string(Some(value), None).is_some_and(|mark| mark.is_empty()) {
                out.push(Diagnostic::error(
                    key_path("MARK"),
                    "marker must be non-empty, item ignored",
                ));
            }
            true
        }
    };
    let has_lines = entry.get("LINES").is_some_and(|v| !v.is_null());
    check_range(out, &key_path("LINES"), entry.get("LINES"));

    if !has_line && !has_mark && !has_lines {
        out.push(Diagnostic::error(
            path,
            "needs a LINE, MARK, or LINES target, item ignored",
        ));
    } else if (has_line as u8 + has_mark as u8 + has_lines as u8) > 1 {
        out.push(Diagnostic::warning(
            path,
            "has more than one target, only the first of LINE, MARK, LINES is used",
        ));
    }

    let text = to_string(entry.get("TEXT"), None);
    if text.is_none_or(|t| t.is_empty()) {
        out.push(Diagnostic::error(key_path("TEXT"), "missing or empty, item ignored"));
    }

    check_bool(out, &key_path("REPLACE"), entry.get("REPLACE"));
    check_enum(out, &key_path("MODE"), entry.get("MODE"), "placement mode", PLACEMENT_MODES);
    check_strings(out, path, entry, &["MARK", "TYPE"]);
}

fn check_pattern(out: &mut Vec<Diagnostic>, value: &Value) {
    if value.is_null() {
        return;
    }
    let Some(pattern) = to_string(Some(value), None) else {
        out.push(Diagnostic::error(PATTERN, "must be a string"));
        return;
    };
    if let Err(e) = CapturePattern::compile(&pattern) {
        out.push(Diagnostic::error(PATTERN, e.to_string()));
    }
}

fn check_styles(out: &mut Vec<Diagnostic>, map: &Mapping) {
    for key in STYLE_KEYS {
        let path = format!("{}.{}", STYLES, key);
        if let Some(value) = map.get(*key)
            && let Some(style) = section(out, &path, value, TEXT_STYLE_KEYS)
        {
            check_strings(out, &path, style, &["COLOR"]);
            check_bool(out, &format!("{}.BOLD", path), style.get("BOLD"));
            check_bool(out, &format!("{}.ITALIC", path), style.get("ITALIC"));
        }
    }
}
