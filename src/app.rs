//! Root component: builds the state signals and installs every controller.
//!
//! The portfolio markup is static, so the root renders nothing. It exists to
//! own the reactive graph: signals created here live for the whole page.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::SiteConfig;
#[cfg(feature = "csr")]
use crate::error::FolioError;

/// Behavior root mounted onto the document body.
#[component]
pub fn FolioRoot() -> impl IntoView {
    #[cfg(feature = "csr")]
    mount_controllers();
}

#[cfg(feature = "csr")]
fn mount_controllers() {
    use crate::controllers;
    use crate::state::modal::ModalState;
    use crate::state::nav::NavState;
    use crate::state::scroll::ScrollState;
    use crate::state::theme::ThemeState;
    use crate::util::dom::{PageElements, scroll_offset};
    use crate::util::theme_storage;

    let Some(window) = web_sys::window() else {
        log::error!("folio: no window; behavior not mounted");
        return;
    };
    let page = match PageElements::resolve(window) {
        Ok(page) => page,
        Err(err) => {
            log::error!("folio: behavior not mounted: {err}");
            return;
        }
    };
    let config = load_config(&page.document);

    let stored = if config.theme_variant.persists() {
        theme_storage::read_preference(&config.storage_key)
    } else {
        None
    };
    let theme = RwSignal::new(ThemeState::initial(config.theme_variant, stored.as_deref()));
    let nav = RwSignal::new(NavState::default());
    let mut initial_scroll = ScrollState::default();
    initial_scroll.set_offset(scroll_offset(&page.window));
    let scroll = RwSignal::new(initial_scroll);
    let modal = RwSignal::new(ModalState::default());

    let installs: [(&str, Result<(), FolioError>); 6] = [
        ("theme", controllers::theme::install(&page, &config, theme)),
        ("nav", controllers::nav::install(&page, &config, nav, scroll)),
        ("scroll", controllers::scroll_effects::install(&page, &config, scroll, theme)),
        ("modal", controllers::modal::install(&page, &config, modal)),
        ("smooth-scroll", controllers::smooth_scroll::install(&page)),
        ("hero", controllers::hero::install(&page, &config)),
    ];
    for (name, result) in installs {
        match result {
            Ok(()) => log::debug!("folio: {name} controller installed"),
            Err(err) => log::warn!("folio: {name} controller failed: {err}"),
        }
    }
    log::info!("folio: mounted ({:?} theme)", theme.with_untracked(|t| t.theme));
}

/// Read the inline config blob, falling back to defaults when absent or invalid.
#[cfg(feature = "csr")]
fn load_config(document: &web_sys::Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(crate::consts::CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("folio: {err}; using defaults");
        SiteConfig::default()
    })
}
