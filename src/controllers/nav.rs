//! Mobile navigation panel and active-link highlighting.

use leptos::prelude::*;
use web_sys::{Event, MouseEvent};

use crate::config::SiteConfig;
use crate::consts::ACTIVE_CLASS;
use crate::error::FolioError;
use crate::state::nav::{NavState, SectionBounds, active_section, bar_styles, link_matches, should_close_on_outside_click};
use crate::state::scroll::ScrollState;
use crate::util::dom::{PageElements, event_within, listen, set_class, set_style};

pub fn install(
    page: &PageElements,
    config: &SiteConfig,
    nav: RwSignal<NavState>,
    scroll: RwSignal<ScrollState>,
) -> Result<(), FolioError> {
    listen(&page.menu_toggle, "click", move |ev: MouseEvent| {
        // Keep the document handler below from seeing this same click.
        ev.stop_propagation();
        nav.update(NavState::toggle);
    })?;

    let panel = page.nav_links.clone();
    let toggle = page.menu_toggle.clone();
    listen(&page.document, "click", move |ev: Event| {
        let open = nav.with_untracked(|state| state.open);
        if should_close_on_outside_click(open, event_within(&ev, &panel), event_within(&ev, &toggle)) {
            nav.update(NavState::close);
        }
    })?;

    for anchor in &page.nav_anchors {
        listen(anchor, "click", move |_: MouseEvent| nav.update(NavState::close))?;
    }

    let panel = page.nav_links.clone();
    let bars = page.menu_bars.clone();
    Effect::new(move || {
        let open = nav.with(|state| state.open);
        set_class(&panel, ACTIVE_CLASS, open);
        for (bar, style) in bars.iter().zip(bar_styles(open)) {
            set_style(bar, "transform", style.transform);
            set_style(bar, "opacity", style.opacity);
        }
    });

    let sections = page.sections.clone();
    let offset_px = config.active_section_offset_px;
    Effect::new(move || {
        let scroll_y = scroll.get().offset;
        // Layout can shift after load (images, fonts), so bounds are read per update.
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
            })
            .collect();
        let current = active_section(scroll_y, &bounds, offset_px);
        if nav.with_untracked(|state| state.active_section != current) {
            let current = current.to_owned();
            nav.update(|state| {
                state.set_active(&current);
            });
        }
    });

    let anchors = page.nav_anchors.clone();
    Effect::new(move || {
        nav.with(|state| {
            for anchor in &anchors {
                let href = anchor.get_attribute("href").unwrap_or_default();
                set_class(anchor, ACTIVE_CLASS, link_matches(&href, &state.active_section));
            }
        });
    });

    Ok(())
}
