//! Theme toggle control.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::state::theme::ThemeState;
use crate::util::dom::{PageElements, listen};
use crate::util::theme_storage;

/// Apply the theme attribute on every change and flip it on toggle clicks.
pub fn install(page: &PageElements, config: &SiteConfig, theme: RwSignal<ThemeState>) -> Result<(), FolioError> {
    Effect::new(move || {
        theme_storage::apply(theme.get().theme);
    });

    let storage_key = config.storage_key.clone();
    listen(&page.theme_toggle, "click", move |_: MouseEvent| {
        if let Some(next) = theme.try_update(ThemeState::toggle).flatten() {
            theme_storage::persist(&storage_key, next);
        }
    })
}
