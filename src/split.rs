//! Content splitter: separates a raw block into configuration and body.
//!
//! A block is one of:
//! - `prelude` + `---` line + literal body
//! - configuration only (parses as a document with a known section key)
//! - literal body only (everything else, including text that happens to
//!   parse as a generic `key: value` document)

use crate::config::types::SECTION_KEYS;
use serde_yaml::Value;

/// The body separator token, on its own line.
pub const BODY_SEPARATOR: &str = "---";

/// A raw block split into its configuration document and literal body.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBlock {
    /// The configuration document, `Value::Null` when there is none.
    pub document: Value,
    /// The literal body. Empty when `has_body` is false.
    pub body: String,
    pub has_body: bool,
}

impl SplitBlock {
    fn literal(raw: &str) -> Self {
        Self {
            document: Value::Null,
            body: raw.to_string(),
            has_body: true,
        }
    }
}

/// Split raw block text. Never fails; ambiguous input is treated as body.
pub fn split_block(raw: &str) -> SplitBlock {
    if let Some((prelude, body)) = find_separator(raw) {
        let document = match serde_yaml::from_str::<Value>(prelude) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "configuration prelude is not a valid document");
                Value::Null
            }
        };
        return SplitBlock {
            document,
            body: body.to_string(),
            has_body: true,
        };
    }

    match serde_yaml::from_str::<Value>(raw) {
        Ok(doc) if has_section_key(&doc) => SplitBlock {
            document: doc,
            body: String::new(),
            has_body: false,
        },
        Ok(_) => SplitBlock::literal(raw),
        Err(e) => {
            tracing::debug!(error = %e, "block does not parse as configuration, treating as literal");
            SplitBlock::literal(raw)
        }
    }
}

/// Whether a parsed document carries at least one recognized section key.
pub fn has_section_key(doc: &Value) -> bool {
    match doc {
        Value::Mapping(map) => SECTION_KEYS.iter().any(|key| map.contains_key(*key)),
        _ => false,
    }
}

/// Locate the first separator line and return `(prelude, body)`.
///
/// The newline before the separator belongs to neither side, and exactly
/// one newline after it is stripped from the body.
fn find_separator(raw: &str) -> Option<(&str, &str)> {
    let mut line_start = 0;

    for line in raw.split('\n') {
        let line_end = line_start + line.len();
        if line.strip_suffix('\r').unwrap_or(line) == BODY_SEPARATOR {
            let prelude = raw[..line_start]
                .strip_suffix('\n')
                .unwrap_or(&raw[..line_start]);
            let rest = &raw[line_end..];
            let body = rest.strip_prefix('\n').unwrap_or(rest);
            return Some((prelude, body));
        }
        line_start = line_end + 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_splits_prelude_and_body() {
        let block = split_block("DISPLAY:\n  LINES: true\n---\nfn main() {}\n");
        assert!(block.has_body);
        assert_eq!(block.body, "fn main() {}\n");
        assert!(has_section_key(&block.document));
    }

    #[test]
    fn separator_at_start_has_empty_prelude() {
        let block = split_block("---\nbody line");
        assert!(block.has_body);
        assert_eq!(block.body, "body line");
        assert_eq!(block.document, Value::Null);
    }

    #[test]
    fn separator_only_strips_one_newline() {
        let block = split_block("META:\n  TITLE: x\n---\n\nsecond");
        assert_eq!(block.body, "\nsecond");
    }

    #[test]
    fn separator_with_crlf() {
        let block = split_block("META:\r\n  TITLE: x\r\n---\r\nbody");
        assert_eq!(block.body, "body");
        assert!(has_section_key(&block.document));
    }

    #[test]
    fn separator_must_be_alone_on_its_line() {
        let block = split_block("a --- b\n----\nc");
        assert!(block.has_body);
        assert_eq!(block.body, "a --- b\n----\nc");
        assert_eq!(block.document, Value::Null);
    }

    #[test]
    fn invalid_prelude_keeps_body() {
        let block = split_block("DISPLAY: [oops\n---\nbody");
        assert!(block.has_body);
        assert_eq!(block.body, "body");
        assert_eq!(block.document, Value::Null);
    }

    #[test]
    fn configuration_only_block() {
        let block = split_block("DISPLAY:\n  ZEBRA: true\n");
        assert!(!block.has_body);
        assert!(block.body.is_empty());
        assert!(has_section_key(&block.document));
    }

    #[test]
    fn generic_key_value_content_is_literal() {
        let raw = "host: localhost\nport: 8080\n";
        let block = split_block(raw);
        assert!(block.has_body);
        assert_eq!(block.body, raw);
        assert_eq!(block.document, Value::Null);
    }

    #[test]
    fn unparseable_content_is_literal() {
        let raw = "fn main() {\n    println!(\"{}\", x: [1);\n}";
        let block = split_block(raw);
        assert!(block.has_body);
        assert_eq!(block.body, raw);
    }

    #[test]
    fn lowercase_section_key_is_literal() {
        let block = split_block("display:\n  zebra: true");
        assert!(block.has_body);
    }

    #[test]
    fn scalar_document_is_literal() {
        let block = split_block("DISPLAY");
        assert!(block.has_body);
        assert_eq!(block.body, "DISPLAY");
    }
}
