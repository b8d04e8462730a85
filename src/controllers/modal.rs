//! Project detail modal.
//!
//! Catalog item clicks open the modal with that item's data; the close
//! button, the overlay, and Escape all close it. Clicks inside the content
//! panel stop at the panel so they never reach the overlay.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, Node, Window};

use crate::config::SiteConfig;
use crate::consts::ACTIVE_CLASS;
use crate::error::FolioError;
use crate::state::modal::{ActionSlot, ModalContent, ModalState, action_slot, action_visible};
use crate::util::dom::{ModalElements, PageElements, listen, set_class, set_style, viewport_width};

pub fn install(page: &PageElements, config: &SiteConfig, modal: RwSignal<ModalState>) -> Result<(), FolioError> {
    let elements = &page.modal;

    for item in &page.catalog_items {
        let source = item.clone();
        listen(item, "click", move |_: MouseEvent| {
            modal.update(|state| state.open(read_item(&source)));
        })?;
    }

    listen(&elements.close, "click", move |_: MouseEvent| modal.update(ModalState::close))?;
    listen(&elements.overlay, "click", move |_: MouseEvent| modal.update(ModalState::close))?;
    listen(&page.document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && modal.with_untracked(|state| state.visible) {
            modal.update(ModalState::close);
        }
    })?;
    listen(&elements.content, "click", move |ev: MouseEvent| ev.stop_propagation())?;

    let action = elements.action.clone();
    listen(&elements.action, "click", move |ev: Event| {
        if !action_visible(action.get_attribute("href").as_deref()) {
            ev.prevent_default();
        }
    })?;

    let breakpoint = config.modal_breakpoint_px;
    let window = page.window.clone();
    let placed = elements.clone();
    listen(&page.window, "resize", move |_: Event| {
        if modal.with_untracked(|state| state.visible) {
            place_action(&placed, &window, breakpoint);
        }
    })?;

    let shown = elements.clone();
    let body = page.body.clone();
    let window = page.window.clone();
    Effect::new(move || {
        modal.with(|state| {
            if let Some(content) = &state.content {
                render_content(&shown, content);
            }
            set_class(&shown.root, ACTIVE_CLASS, state.visible);
            set_style(&body, "overflow", if state.visible { "hidden" } else { "" });
            if state.visible {
                place_action(&shown, &window, breakpoint);
            }
        });
    });

    log::debug!("modal: {} catalog items", page.catalog_items.len());
    Ok(())
}

fn read_item(item: &HtmlElement) -> ModalContent {
    let image_src = item
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src());
    ModalContent::from_attrs(
        image_src,
        item.get_attribute("data-category"),
        item.get_attribute("data-title"),
        item.get_attribute("data-description"),
        item.get_attribute("data-link"),
    )
}

fn render_content(elements: &ModalElements, content: &ModalContent) {
    elements.image.set_src(&content.image_src);
    elements.category.set_text_content(Some(&content.category));
    elements.title.set_text_content(Some(&content.title));
    elements.description.set_text_content(Some(&content.description));

    let action = &elements.action;
    match content.link.as_deref() {
        Some(link) if content.has_action() => {
            action.set_href(link);
            action.set_target("_blank");
            action.set_rel("noopener noreferrer");
            action.set_hidden(false);
        }
        _ => {
            action.set_href("#");
            action.set_hidden(true);
        }
    }
}

/// Move the action control into the container for the current viewport width.
fn place_action(elements: &ModalElements, window: &Window, breakpoint: f64) {
    let slot = match action_slot(viewport_width(window), breakpoint) {
        ActionSlot::Compact => elements.compact_slot.as_ref(),
        ActionSlot::Wide => elements.wide_slot.as_ref(),
    };
    let Some(slot) = slot else {
        return;
    };
    let slot_node: &Node = slot;
    let already_placed = elements
        .action
        .parent_element()
        .is_some_and(|parent| parent.is_same_node(Some(slot_node)));
    if already_placed {
        return;
    }
    if let Err(err) = slot.append_child(&elements.action) {
        log::warn!("modal: failed to move action control: {err:?}");
    }
}
