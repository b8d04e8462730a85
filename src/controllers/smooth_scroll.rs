//! Smooth scrolling for same-page fragment links.

use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::FolioError;
use crate::state::anchor::scroll_target;
use crate::util::dom::{PageElements, listen};

/// Intercept `#id` link clicks whose target exists and scroll to it smoothly.
/// Links to a bare `#` or a missing id keep the browser's default behavior.
pub fn install(page: &PageElements) -> Result<(), FolioError> {
    for link in &page.fragment_links {
        let anchor = link.clone();
        let document = page.document.clone();
        listen(link, "click", move |ev: MouseEvent| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(target) = scroll_target(&href, |id| document.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
