//! Project detail modal.
//!
//! ARCHITECTURE
//! ============
//! Clicking a catalog item copies its data attributes into [`ModalContent`]
//! in one step and shows the modal. Closing only hides it; the content stays
//! until the next open replaces it wholesale.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Display fields copied from a catalog item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub image_src: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

impl ModalContent {
    /// Build content from raw item attributes; missing text fields become empty.
    #[must_use]
    pub fn from_attrs(
        image_src: Option<String>,
        category: Option<String>,
        title: Option<String>,
        description: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            image_src: image_src.unwrap_or_default(),
            category: category.unwrap_or_default(),
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            link: link.filter(|l| action_visible(Some(l.as_str()))),
        }
    }

    /// Whether the action control should be shown for this content.
    #[must_use]
    pub fn has_action(&self) -> bool {
        action_visible(self.link.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub content: Option<ModalContent>,
}

impl ModalState {
    pub fn open(&mut self, content: ModalContent) {
        self.content = Some(content);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

/// A link is actionable unless it is absent, blank, or a bare `#`.
#[must_use]
pub fn action_visible(link: Option<&str>) -> bool {
    link.map(str::trim).is_some_and(|l| !l.is_empty() && l != "#")
}

/// Container the action control is moved into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSlot {
    /// Narrow viewports (at or below the breakpoint).
    Compact,
    Wide,
}

#[must_use]
pub fn action_slot(viewport_width: f64, breakpoint_px: f64) -> ActionSlot {
    if viewport_width <= breakpoint_px { ActionSlot::Compact } else { ActionSlot::Wide }
}
