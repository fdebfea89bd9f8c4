//! Settings loading, validation, and serialization.

use super::model::Settings;
use crate::config::types::{ANNOTATION_VARIANTS, PLACEMENT_MODES, PRINT_BEHAVIORS, STYLE_NAMES};
use crate::error::{CodefenceError, Result};
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(CodefenceError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CodefenceError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    ///
    /// Enumerated names are lower-cased before validation, matching how
    /// block configuration treats them.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                CodefenceError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.normalize();
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CodefenceError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    fn normalize(&mut self) {
        self.display.style = self.display.style.to_lowercase();
        self.display.print = self.display.print.to_lowercase();
        self.annotations.mode = self.annotations.mode.to_lowercase();
        self.annotations.print_mode = self
            .annotations
            .print_mode
            .take()
            .map(|mode| mode.to_lowercase())
            .filter(|mode| !mode.is_empty());
        self.annotations.variant = self.annotations.variant.to_lowercase();
    }

    /// Validate settings values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `display.style` must be a known style name
    /// - `display.print` must be a known print behavior
    /// - `annotations.mode` and `annotations.print_mode` (when set) must be known placement modes
    /// - `annotations.variant` must be a known variant
    /// - `display.exclude` must be a valid regex when non-empty
    pub fn validate(&self) -> Result<()> {
        check_known("display.style", &self.display.style, STYLE_NAMES)?;
        check_known("display.print", &self.display.print, PRINT_BEHAVIORS)?;
        check_known("annotations.mode", &self.annotations.mode, PLACEMENT_MODES)?;
        if let Some(print_mode) = &self.annotations.print_mode {
            check_known("annotations.print_mode", print_mode, PLACEMENT_MODES)?;
        }
        check_known(
            "annotations.variant",
            &self.annotations.variant,
            ANNOTATION_VARIANTS,
        )?;

        if !self.display.exclude.is_empty() {
            regex::Regex::new(&self.display.exclude).map_err(|e| {
                CodefenceError::UserError(format!(
                    "settings validation failed: display.exclude is not a valid regex: {}",
                    e
                ))
            })?;
        }

        Ok(())
    }
}

fn check_known(field: &str, value: &str, known: &[&str]) -> Result<()> {
    if known.contains(&value) {
        return Ok(());
    }
    Err(CodefenceError::UserError(format!(
        "settings validation failed: {} '{}' is not one of: {}",
        field,
        value,
        known.join(", ")
    )))
}
