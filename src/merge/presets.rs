//! Preset lookup.

use crate::error::{CodefenceError, Result};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

/// A read-only store of named presets.
///
/// Returns the raw configuration text of a preset; the resolver parses it.
pub trait PresetLookup {
    fn preset_source(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> PresetLookup for HashMap<String, String, S> {
    fn preset_source(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PresetLookup for BTreeMap<String, String> {
    fn preset_source(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Presets loaded from a YAML file mapping names to configuration.
///
/// Each value is either configuration text or an inline mapping:
///
/// ```yaml
/// go: |
///   DISPLAY:
///     LANG: go
/// shell:
///   DISPLAY:
///     STYLE: terminal
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetStore {
    presets: BTreeMap<String, String>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.presets.insert(name.into(), source.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Load presets from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CodefenceError::UserError(format!(
                "failed to read presets file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse presets from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(yaml)
            .map_err(|e| CodefenceError::UserError(format!("failed to parse presets YAML: {}", e)))?;

        let mut store = Self::new();
        let map = match doc {
            Value::Null => return Ok(store),
            Value::Mapping(map) => map,
            _ => {
                return Err(CodefenceError::UserError(
                    "presets file must be a mapping of preset name to configuration".to_string(),
                ));
            }
        };

        for (name, body) in map {
            let Some(name) = name.as_str() else {
                return Err(CodefenceError::UserError(
                    "preset names must be strings".to_string(),
                ));
            };
            let source = match body {
                Value::String(text) => text,
                other => serde_yaml::to_string(&other).map_err(|e| {
                    CodefenceError::UserError(format!(
                        "failed to serialize preset '{}': {}",
                        name, e
                    ))
                })?,
            };
            store.insert(name, source);
        }

        Ok(store)
    }
}

impl PresetLookup for PresetStore {
    fn preset_source(&self, name: &str) -> Option<&str> {
        self.presets.preset_source(name)
    }
}
