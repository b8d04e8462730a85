//! Scroll offset and the styling derived from it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::theme::Theme;

/// Latest vertical scroll offset reported by the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
}

impl ScrollState {
    /// Store a new offset. Returns `true` if it changed.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        let offset = offset.max(0.0);
        if (self.offset - offset).abs() < f64::EPSILON {
            return false;
        }
        self.offset = offset;
        true
    }
}

/// Navbar background and shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Navbar styling as a pure function of whether the page has scrolled past
/// `threshold_px` and the current theme.
#[must_use]
pub fn navbar_style(offset: f64, theme: Theme, threshold_px: f64) -> NavbarStyle {
    let scrolled = offset > threshold_px;
    match (theme, scrolled) {
        (Theme::Dark, true) => NavbarStyle {
            background: "rgba(10, 10, 10, 0.95)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.3)",
        },
        (Theme::Dark, false) => NavbarStyle { background: "rgba(10, 10, 10, 0.8)", box_shadow: "none" },
        (Theme::Light, true) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        },
        (Theme::Light, false) => NavbarStyle { background: "rgba(255, 255, 255, 0.8)", box_shadow: "none" },
    }
}

#[must_use]
pub fn scroll_top_visible(offset: f64, threshold_px: f64) -> bool {
    offset > threshold_px
}
