//! Theme preference storage and root attribute.
//!
//! Reads the stored preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: missing storage (private mode, disabled
//! cookies) reads as "no preference" and writes are dropped with a warning.
//! Native builds no-op so state logic stays testable off-browser.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;

/// Read the raw stored theme value for `key`, if any.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn read_preference(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Write `theme` to storage under `key`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn persist(key: &str, theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("theme: storage unavailable, preference not saved");
            return;
        };
        if let Err(err) = storage.set_item(key, theme.as_attr()) {
            log::warn!("theme: failed to save preference: {err:?}");
        }
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_attr()) {
            log::warn!("theme: failed to set data-theme: {err:?}");
        }
    }
}
