//! Default value functions for settings.

// Default value functions for serde
pub(crate) fn default_style() -> String {
    "default".to_string()
}
pub(crate) fn default_join() -> String {
    "&&".to_string()
}
pub(crate) fn default_join_alt() -> String {
    "||".to_string()
}
pub(crate) fn default_print() -> String {
    "expand".to_string()
}
pub(crate) fn default_mode() -> String {
    "inline".to_string()
}
pub(crate) fn default_variant() -> String {
    "default".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
