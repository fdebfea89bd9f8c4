//! Tests for annotation resolution.

use super::*;
use crate::config::{AnnotationEntry, LineRange};
use crate::test_support::{CONFIG_GO, numbered_lines};

// =========================================================================
// Helper functions
// =========================================================================

fn section(items: Vec<AnnotationEntry>) -> ResolvedAnnotations {
    ResolvedAnnotations {
        mode: "inline".to_string(),
        print_mode: Some("footnote".to_string()),
        variant: "default".to_string(),
        items,
    }
}

fn at_line(line: i64, text: &str) -> AnnotationEntry {
    AnnotationEntry {
        line: Some(line),
        text: Some(text.to_string()),
        ..Default::default()
    }
}

fn at_mark(mark: &str, text: &str) -> AnnotationEntry {
    AnnotationEntry {
        mark: Some(mark.to_string()),
        text: Some(text.to_string()),
        ..Default::default()
    }
}

fn at_lines(start: usize, end: usize, text: &str) -> AnnotationEntry {
    AnnotationEntry {
        lines: Some(LineRange { start, end }),
        text: Some(text.to_string()),
        ..Default::default()
    }
}

// =========================================================================
// LINE targets
// =========================================================================

#[test]
fn test_line_target_in_range() {
    let resolved = resolve_annotations(&section(vec![at_line(3, "third")]), &numbered_lines(5));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].lines, vec![3]);
    assert!(resolved[0].is_resolved());
    assert_eq!(resolved[0].first_line(), Some(3));
}

#[test]
fn test_line_target_bounds() {
    let content = numbered_lines(5);
    let items = vec![
        at_line(0, "zero"),
        at_line(1, "first"),
        at_line(5, "last"),
        at_line(6, "past end"),
        at_line(-2, "negative"),
    ];
    let resolved = resolve_annotations(&section(items), &content);
    let texts: Vec<_> = resolved.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "last"]);
}

// =========================================================================
// MARK targets
// =========================================================================

#[test]
fn test_mark_target_uses_first_match() {
    let content = "alpha\nbeta marker\ngamma marker";
    let resolved = resolve_annotations(&section(vec![at_mark("marker", "note")]), content);
    assert_eq!(resolved[0].lines, vec![2]);
}

#[test]
fn test_mark_target_is_case_sensitive() {
    let content = "alpha\nBETA";
    let resolved = resolve_annotations(&section(vec![at_mark("beta", "note")]), content);
    assert!(resolved.is_empty());
}

#[test]
fn test_empty_mark_never_matches() {
    let items = vec![at_mark("", "empty"), at_line(2, "kept")];
    let resolved = resolve_annotations(&section(items), "alpha\nbeta");
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].text, "kept");
}

#[test]
fn test_mark_target_on_fixture() {
    let resolved = resolve_annotations(
        &section(vec![at_mark("func Load", "entry point")]),
        CONFIG_GO,
    );
    assert_eq!(resolved[0].lines, vec![52]);
}

// =========================================================================
// LINES targets
// =========================================================================

#[test]
fn test_lines_target_expands_range() {
    let resolved = resolve_annotations(&section(vec![at_lines(2, 4, "block")]), &numbered_lines(5));
    assert_eq!(resolved[0].lines, vec![2, 3, 4]);
}

#[test]
fn test_lines_target_drops_lines_past_end() {
    let resolved = resolve_annotations(&section(vec![at_lines(4, 9, "tail")]), &numbered_lines(5));
    assert_eq!(resolved[0].lines, vec![4, 5]);
}

#[test]
fn test_lines_target_entirely_past_end_is_dropped() {
    let resolved = resolve_annotations(&section(vec![at_lines(7, 9, "gone")]), &numbered_lines(5));
    assert!(resolved.is_empty());
}

// =========================================================================
// Precedence and filtering
// =========================================================================

#[test]
fn test_line_beats_mark() {
    let entry = AnnotationEntry {
        line: Some(3),
        mark: Some("x".to_string()),
        text: Some("both".to_string()),
        ..Default::default()
    };
    let content = "x\nb\nc\nx";
    let resolved = resolve_annotations(&section(vec![entry]), content);
    assert_eq!(resolved[0].lines, vec![3]);
}

#[test]
fn test_mark_beats_lines() {
    let entry = AnnotationEntry {
        mark: Some("c".to_string()),
        lines: Some(LineRange { start: 1, end: 2 }),
        text: Some("both".to_string()),
        ..Default::default()
    };
    let resolved = resolve_annotations(&section(vec![entry]), "a\nb\nc");
    assert_eq!(resolved[0].lines, vec![3]);
}

#[test]
fn test_invalid_line_does_not_fall_back_to_mark() {
    let entry = AnnotationEntry {
        line: Some(99),
        mark: Some("a".to_string()),
        text: Some("miss".to_string()),
        ..Default::default()
    };
    let resolved = resolve_annotations(&section(vec![entry]), "a\nb");
    assert!(resolved.is_empty());
}

#[test]
fn test_entries_without_text_are_skipped() {
    let no_text = AnnotationEntry {
        line: Some(1),
        ..Default::default()
    };
    let empty_text = at_line(1, "");
    let resolved = resolve_annotations(
        &section(vec![no_text, empty_text, at_line(2, "kept")]),
        &numbered_lines(3),
    );
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].text, "kept");
}

#[test]
fn test_entry_without_target_is_dropped() {
    let entry = AnnotationEntry {
        text: Some("floating".to_string()),
        ..Default::default()
    };
    assert_eq!(target_kind(&entry), None);
    assert!(resolve_annotations(&section(vec![entry]), "a").is_empty());
}

#[test]
fn test_order_is_input_order_not_line_order() {
    let items = vec![at_line(4, "d"), at_line(1, "a"), at_mark("line 3", "c")];
    let resolved = resolve_annotations(&section(items), &numbered_lines(5));
    let texts: Vec<_> = resolved.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["d", "a", "c"]);
}

#[test]
fn test_miss_does_not_abort_remaining_entries() {
    let items = vec![at_mark("absent", "x"), at_line(2, "y")];
    let resolved = resolve_annotations(&section(items), &numbered_lines(2));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].text, "y");
}

// =========================================================================
// Placement
// =========================================================================

#[test]
fn test_entry_mode_overrides_section_mode() {
    let mut entry = at_line(1, "note");
    entry.mode = Some("tooltip".to_string());
    let mut sec = section(vec![entry, at_line(1, "plain")]);
    sec.mode = "banner".to_string();

    let resolved = resolve_annotations(&sec, "a");
    assert_eq!(resolved[0].mode, "tooltip");
    assert_eq!(resolved[1].mode, "banner");
}

#[test]
fn test_empty_section_mode_falls_back_to_inline() {
    let mut sec = section(vec![at_line(1, "note")]);
    sec.mode = String::new();
    sec.print_mode = None;

    let resolved = resolve_annotations(&sec, "a");
    assert_eq!(resolved[0].mode, "inline");
    assert_eq!(resolved[0].print_mode, "inline");
}

#[test]
fn test_resolved_fields_are_carried() {
    let mut entry = at_line(1, "note");
    entry.replace = Some(true);
    entry.kind = Some("warning".to_string());
    let mut sec = section(vec![entry]);
    sec.variant = "info".to_string();

    let resolved = resolve_annotations(&sec, "a");
    assert!(resolved[0].replace);
    assert_eq!(resolved[0].kind.as_deref(), Some("warning"));
    assert_eq!(resolved[0].variant, "info");
    assert_eq!(resolved[0].print_mode, "footnote");
}
