//! Tests for settings functionality.

use crate::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.display.fold, 0);
    assert_eq!(settings.display.scroll, 0);
    assert!(!settings.display.zebra);
    assert!(settings.display.line_numbers);
    assert!(settings.display.copy);
    assert_eq!(settings.display.style, "default");
    assert_eq!(settings.display.language, "");
    assert_eq!(settings.display.join, "&&");
    assert_eq!(settings.display.join_alt, "||");
    assert_eq!(settings.display.exclude, "");
    assert_eq!(settings.display.print, "expand");
    assert_eq!(settings.annotations.mode, "inline");
    assert_eq!(settings.annotations.print_mode, None);
    assert_eq!(settings.annotations.variant, "default");
}

#[test]
fn test_parse_minimal_yaml() {
    let settings = Settings::from_yaml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
display:
  fold: 15
  zebra: true
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(settings.display.fold, 15);
    assert!(settings.display.zebra);

    // Unspecified values should use defaults
    assert!(settings.display.line_numbers);
    assert_eq!(settings.display.style, "default");
    assert_eq!(settings.annotations.mode, "inline");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
display:
  fold: 30
  scroll: 60
  zebra: true
  line_numbers: false
  copy: false
  style: Terminal
  language: text
  join: "and"
  join_alt: "or"
  exclude: "^#"
  print: collapse
annotations:
  mode: Banner
  print_mode: inline
  variant: info
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.display.fold, 30);
    assert_eq!(settings.display.scroll, 60);
    assert!(settings.display.zebra);
    assert!(!settings.display.line_numbers);
    assert!(!settings.display.copy);
    assert_eq!(settings.display.style, "terminal");
    assert_eq!(settings.display.language, "text");
    assert_eq!(settings.display.join, "and");
    assert_eq!(settings.display.join_alt, "or");
    assert_eq!(settings.display.exclude, "^#");
    assert_eq!(settings.display.print, "collapse");
    assert_eq!(settings.annotations.mode, "banner");
    assert_eq!(settings.annotations.print_mode.as_deref(), Some("inline"));
    assert_eq!(settings.annotations.variant, "info");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
display:
  fold: 5
  future_option: true
theme: dark
"#;
    let settings = Settings::from_yaml(yaml).unwrap();
    assert_eq!(settings.display.fold, 5);
}

#[test]
fn test_validate_unknown_style() {
    let result = Settings::from_yaml("display:\n  style: neon");

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("display.style"));
    assert!(err.to_string().contains("neon"));
}

#[test]
fn test_validate_unknown_placement_mode() {
    let result = Settings::from_yaml("annotations:\n  mode: sidebar");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("annotations.mode"));
}

#[test]
fn test_validate_invalid_exclude_regex() {
    let result = Settings::from_yaml("display:\n  exclude: '(unclosed'");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("display.exclude"));
}

#[test]
fn test_invalid_yaml() {
    let result = Settings::from_yaml("display: [");
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to parse settings YAML")
    );
}

#[test]
fn test_to_yaml() {
    let settings = Settings::default();
    let yaml = settings.to_yaml().unwrap();

    // Should be valid YAML that can be parsed back
    let parsed = Settings::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_settings_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "display:").unwrap();
    writeln!(file, "  fold: 7").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.display.fold, 7);
}

#[test]
fn test_settings_load_missing_file() {
    let result = Settings::load("/nonexistent/path/settings.yaml");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}
