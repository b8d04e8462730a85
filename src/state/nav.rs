//! Mobile navigation panel and active-link tracking.
//!
//! DESIGN
//! ======
//! Panel visibility and the highlighted section are one model so a scroll
//! update and a panel toggle never race over the same link classes. The
//! active section is always set to *some* id, which is what keeps exactly
//! one nav link highlighted at any settled scroll position.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{BAR_BOTTOM_OPEN_TRANSFORM, BAR_TOP_OPEN_TRANSFORM, HOME_SECTION_ID};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
    pub active_section: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self { open: false, active_section: HOME_SECTION_ID.to_owned() }
    }
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record the section now under the viewport. Returns `true` if it changed.
    pub fn set_active(&mut self, section_id: &str) -> bool {
        if self.active_section == section_id {
            return false;
        }
        section_id.clone_into(&mut self.active_section);
        true
    }
}

/// Inline style for one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Styles for the three hamburger bars: an "X" when open, plain bars when closed.
#[must_use]
pub fn bar_styles(open: bool) -> [BarStyle; 3] {
    if open {
        [
            BarStyle { transform: BAR_TOP_OPEN_TRANSFORM, opacity: "1" },
            BarStyle { transform: "", opacity: "0" },
            BarStyle { transform: BAR_BOTTOM_OPEN_TRANSFORM, opacity: "1" },
        ]
    } else {
        [BarStyle { transform: "", opacity: "1" }; 3]
    }
}

/// Whether a document click should close the panel.
#[must_use]
pub fn should_close_on_outside_click(open: bool, inside_panel: bool, inside_toggle: bool) -> bool {
    open && !inside_panel && !inside_toggle
}

/// Vertical placement of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Pick the section the reader is in.
///
/// Sections are in document order. The last section whose top, pulled up by
/// `offset_px`, is at or above the scroll offset wins. Above every section the
/// home section is active.
#[must_use]
pub fn active_section<'a>(scroll_y: f64, sections: &'a [SectionBounds], offset_px: f64) -> &'a str {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset_px)
        .map_or(HOME_SECTION_ID, |section| section.id.as_str())
}

/// Whether a nav link's `href` points at `section_id`.
#[must_use]
pub fn link_matches(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#').is_some_and(|fragment| fragment == section_id)
}
