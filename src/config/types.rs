//! Grammar constants for the configuration document.
//!
//! Section and field names are case-sensitive and upper-case by
//! convention. The alias table is the only place where historical key
//! names are mapped onto their current spelling.

/// Top-level section keys.
pub const META: &str = "META";
pub const DISPLAY: &str = "DISPLAY";
pub const FILTER: &str = "FILTER";
pub const ANNOTATIONS: &str = "ANNOTATIONS";
pub const PATTERN: &str = "PATTERN";
pub const STYLES: &str = "STYLES";

/// Keys whose presence marks a document as configuration.
pub const SECTION_KEYS: &[&str] = &[META, DISPLAY, FILTER, ANNOTATIONS, PATTERN, STYLES];

pub const META_KEYS: &[&str] = &["PATH", "TITLE", "DESC", "PRESET"];

pub const DISPLAY_KEYS: &[&str] = &[
    "FOLD", "SCROLL", "ZEBRA", "LINES", "COPY", "STYLE", "LANG", "JOIN", "JOIN_ALT", "JOIN_OR",
    "EXCLUDE", "PRINT",
];

pub const FILTER_KEYS: &[&str] = &["LINES", "MARKS"];
pub const RANGE_FILTER_KEYS: &[&str] = &["RANGE", "INCLUSIVE"];
pub const MARKER_FILTER_KEYS: &[&str] = &["START", "END", "INCLUSIVE"];

pub const ANNOTATION_KEYS: &[&str] = &["MODE", "PRINT_MODE", "VARIANT", "ITEMS"];
pub const ANNOTATION_ITEM_KEYS: &[&str] =
    &["LINE", "MARK", "LINES", "TEXT", "REPLACE", "MODE", "TYPE"];

pub const STYLE_KEYS: &[&str] = &["PROMPT", "COMMAND", "OUTPUT"];
pub const TEXT_STYLE_KEYS: &[&str] = &["COLOR", "BOLD", "ITALIC"];

/// Legacy key spellings, as `(section, alias, primary)`.
///
/// When both spellings are present the primary one wins.
pub const KEY_ALIASES: &[(&str, &str, &str)] = &[(DISPLAY, "JOIN_OR", "JOIN_ALT")];

/// Return the aliases that map onto `primary` within `section`.
pub fn aliases_for<'a>(section: &'a str, primary: &'a str) -> impl Iterator<Item = &'static str> + 'a {
    KEY_ALIASES
        .iter()
        .filter(move |(s, _, p)| *s == section && *p == primary)
        .map(|(_, alias, _)| *alias)
}

/// Known style names.
pub const STYLE_NAMES: &[&str] = &["default", "minimal", "bordered", "terminal"];

/// Known print behaviors.
pub const PRINT_BEHAVIORS: &[&str] = &["expand", "collapse", "hide"];

/// Known annotation placement modes.
pub const PLACEMENT_MODES: &[&str] = &["inline", "banner", "footnote", "tooltip", "hidden"];

/// Known annotation variants.
pub const ANNOTATION_VARIANTS: &[&str] = &["default", "info", "warning", "error", "success"];

/// Placement mode used when neither the entry nor any layer names one.
pub const DEFAULT_PLACEMENT_MODE: &str = "inline";
