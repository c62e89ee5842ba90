//! Weather icon glyphs
//!
//! Icon identifiers (`"02d"`, `"10n"`, ...) name images on the icon host; see
//! [`crate::data::icon_url`]. The terminal shows a glyph instead, and falls
//! back to a `--` placeholder when an identifier cannot be resolved.

use crate::data::icon_url;

/// Shown where an icon cannot be resolved
pub const PLACEHOLDER: &str = "--";

/// Maps an icon identifier to a terminal glyph
///
/// # Returns
/// * `Some(glyph)` for a known base code with a `d` or `n` suffix
/// * `None` otherwise
pub fn glyph_for(icon: &str) -> Option<&'static str> {
    let (base, is_day) = match (icon.strip_suffix('d'), icon.strip_suffix('n')) {
        (Some(base), _) => (base, true),
        (None, Some(base)) => (base, false),
        (None, None) => return None,
    };

    let glyph = match (base, is_day) {
        ("01", true) => "☀",
        ("01", false) => "☾",
        ("02", true) => "⛅",
        ("02", false) | ("03", _) | ("04", _) => "☁",
        ("09", _) => "☂",
        ("10", _) => "☔",
        ("11", _) => "⚡",
        ("13", _) => "❄",
        ("50", _) => "≡",
        _ => return None,
    };
    Some(glyph)
}

/// Glyph for `icon`, or the placeholder
pub fn glyph_or_placeholder(icon: &str) -> &'static str {
    glyph_for(icon).unwrap_or(PLACEHOLDER)
}

/// The large current-conditions icon
///
/// Remembers whether the current identifier failed to resolve. The failure is
/// cleared as soon as a different identifier is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSlot {
    icon: Option<String>,
    failed: bool,
}

impl IconSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the slot at `icon`; a no-op when it is already showing it
    pub fn show(&mut self, icon: &str) {
        if self.icon.as_deref() == Some(icon) {
            return;
        }
        self.icon = Some(icon.to_string());
        self.failed = glyph_for(icon).is_none();
        if self.failed {
            tracing::debug!(icon, "no glyph for icon");
        }
    }

    /// Records that the current icon could not be loaded
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// What to draw: the glyph, or the placeholder after a failure
    pub fn glyph(&self) -> &'static str {
        match (&self.icon, self.failed) {
            (Some(icon), false) => glyph_or_placeholder(icon),
            _ => PLACEHOLDER,
        }
    }

    /// Image URL for the current icon
    pub fn url(&self) -> Option<String> {
        self.icon.as_deref().map(icon_url)
    }
}
