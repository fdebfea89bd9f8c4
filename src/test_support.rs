use crate::config::BlockConfig;
use std::collections::HashMap;

pub(crate) const FIBONACCI_PY: &str = include_str!("../tests/fixtures/fibonacci.py");
pub(crate) const CONFIG_GO: &str = include_str!("../tests/fixtures/config.go");

/// `"line 1\nline 2\n...\nline n"` with no trailing newline.
pub(crate) fn numbered_lines(n: usize) -> String {
    (1..=n)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a YAML configuration snippet, panicking on invalid YAML so a
/// typo in a test does not silently become an empty layer.
pub(crate) fn config(yaml: &str) -> BlockConfig {
    let doc: serde_yaml::Value = serde_yaml::from_str(yaml)
        .unwrap_or_else(|e| panic!("invalid test YAML: {}\n{}", e, yaml));
    BlockConfig::from_document(&doc)
}

/// Build a preset store from `(name, yaml)` pairs.
pub(crate) fn presets(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(name, body)| (name.to_string(), body.to_string()))
        .collect()
}
