//! Same-page fragment links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id targeted by an in-page `href`, if any.
///
/// Only `#id` forms with a non-empty id qualify. A bare `#` or any other
/// `href` returns `None` and the browser's default navigation applies.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolve the element an in-page link should scroll to.
///
/// `lookup` maps an element id to the element, if the page has one. `None`
/// means the click is left to the browser.
pub fn scroll_target<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    fragment_target(href).and_then(lookup)
}
