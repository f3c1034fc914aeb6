/// Canonical element/property name → abbreviation used in the style parameter.
pub const SHORT_CODES: &[(&str, &str)] = &[
    ("water", "wt"),
    ("road", "rd"),
    ("fillColor", "fc"),
    ("labelColor", "lbc"),
    ("landColor", "lc"),
];

/// Code of the global settings block.
pub const SETTINGS_CODE: &str = "g";

/// Look up the short code for a canonical name.
pub fn short_code(name: &str) -> Option<&'static str> {
    SHORT_CODES
        .iter()
        .find(|(canonical, _)| *canonical == name)
        .map(|(_, code)| *code)
}
