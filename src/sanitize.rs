//! Display sanitization (pure).
//!
//! Catalog data is third-party content. Text destined for the terminal is
//! stripped of control characters that could corrupt the display, and
//! URLs with script-capable schemes are rejected outright.

/// Clean a text field for single-line terminal display.
///
/// Removes control characters (including escape sequences), converts any
/// internal whitespace runs to single spaces and trims the ends.
pub fn clean_text(raw: &str) -> String {
    let no_controls: String = raw.chars().filter(|c| !c.is_control()).collect();
    no_controls.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Filter a URL for display or opening.
///
/// Only http, https and relative URLs pass; `javascript:`, `data:` and
/// `vbscript:` schemes return an empty string, matching the behavior of
/// a cautious renderer that would rather show nothing.
pub fn safe_url(raw: &str) -> &str {
    let lower = raw.trim_start();
    let blocked = ["javascript:", "data:", "vbscript:"];
    if blocked.iter().any(|scheme| {
        lower
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    }) {
        ""
    } else {
        raw
    }
}
