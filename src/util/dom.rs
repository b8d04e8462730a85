//! Typed element handles and web-sys listener glue.
//!
//! ARCHITECTURE
//! ============
//! Every element a controller touches is resolved once, at mount, into a
//! concrete web-sys type. Required elements that are missing or of the wrong
//! type fail the mount with a [`FolioError`] instead of surfacing later inside
//! an event handler. Optional groups (stats, sections, the hero title) are
//! simply empty when the page does not carry them.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlAnchorElement, HtmlElement, HtmlImageElement, Node, Window,
};

use crate::consts::*;
use crate::error::FolioError;

/// Resolve a required element by id.
pub fn by_id<T: JsCast>(document: &Document, id: &'static str, expected: &'static str) -> Result<T, FolioError> {
    document
        .get_element_by_id(id)
        .ok_or(FolioError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| FolioError::UnexpectedElement { selector: id, expected })
}

/// Resolve a required element by selector, searching from `root`.
pub fn query<T: JsCast>(root: &Element, selector: &'static str, expected: &'static str) -> Result<T, FolioError> {
    root.query_selector(selector)?
        .ok_or(FolioError::MissingElement(selector))?
        .dyn_into::<T>()
        .map_err(|_| FolioError::UnexpectedElement { selector, expected })
}

/// Every element under `root` matching `selector` that is a `T`.
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, FolioError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Set an inline style property, logging instead of failing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("style {property}={value} failed: {err:?}");
    }
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class} update failed: {err:?}");
    }
}

/// Current vertical scroll offset.
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Current viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0)
}

/// Whether the event's target lies inside `container`.
pub fn event_within(event: &Event, container: &Node) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    container.contains(target.as_ref())
}

/// Elements of the project detail modal.
#[derive(Clone)]
pub struct ModalElements {
    pub root: HtmlElement,
    pub close: HtmlElement,
    pub overlay: HtmlElement,
    pub content: HtmlElement,
    pub image: HtmlImageElement,
    pub category: HtmlElement,
    pub title: HtmlElement,
    pub description: HtmlElement,
    pub action: HtmlAnchorElement,
    pub compact_slot: Option<Element>,
    pub wide_slot: Option<Element>,
}

impl ModalElements {
    fn resolve(document: &Document, root: &Element) -> Result<Self, FolioError> {
        Ok(Self {
            root: by_id(document, MODAL_ID, "HtmlElement")?,
            close: by_id(document, MODAL_CLOSE_ID, "HtmlElement")?,
            overlay: query(root, MODAL_OVERLAY_SELECTOR, "HtmlElement")?,
            content: query(root, MODAL_CONTENT_SELECTOR, "HtmlElement")?,
            image: by_id(document, MODAL_IMAGE_ID, "HtmlImageElement")?,
            category: by_id(document, MODAL_CATEGORY_ID, "HtmlElement")?,
            title: by_id(document, MODAL_TITLE_ID, "HtmlElement")?,
            description: by_id(document, MODAL_DESCRIPTION_ID, "HtmlElement")?,
            action: by_id(document, MODAL_ACTION_ID, "HtmlAnchorElement")?,
            compact_slot: document.get_element_by_id(MODAL_ACTION_SLOT_COMPACT_ID),
            wide_slot: document.get_element_by_id(MODAL_ACTION_SLOT_WIDE_ID),
        })
    }
}

/// Every element the controllers bind to, resolved once at mount.
#[derive(Clone)]
pub struct PageElements {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub navbar: HtmlElement,
    pub theme_toggle: HtmlElement,
    pub menu_toggle: HtmlElement,
    pub menu_bars: Vec<HtmlElement>,
    pub nav_links: HtmlElement,
    pub nav_anchors: Vec<HtmlAnchorElement>,
    pub scroll_top: Option<HtmlElement>,
    pub modal: ModalElements,
    pub catalog_items: Vec<HtmlElement>,
    pub stats: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub fragment_links: Vec<HtmlAnchorElement>,
    pub hero_title: Option<HtmlElement>,
}

impl PageElements {
    /// Resolve the page's interactive elements.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] or [`FolioError::UnexpectedElement`]
    /// for the first required element that cannot be bound.
    pub fn resolve(window: Window) -> Result<Self, FolioError> {
        let document = window.document().ok_or(FolioError::MissingElement("document"))?;
        let root = document.document_element().ok_or(FolioError::MissingElement("html"))?;
        let body = document.body().ok_or(FolioError::MissingElement("body"))?;
        let menu_toggle: HtmlElement = by_id(&document, MENU_TOGGLE_ID, "HtmlElement")?;
        let nav_links: HtmlElement = by_id(&document, NAV_LINKS_ID, "HtmlElement")?;
        let modal = ModalElements::resolve(&document, &root)?;

        Ok(Self {
            navbar: query(&root, NAVBAR_SELECTOR, "HtmlElement")?,
            theme_toggle: by_id(&document, THEME_TOGGLE_ID, "HtmlElement")?,
            menu_bars: query_all(&menu_toggle, "span")?,
            nav_anchors: query_all(&nav_links, "a")?,
            scroll_top: document.get_element_by_id(SCROLL_TOP_ID).and_then(|el| el.dyn_into().ok()),
            catalog_items: query_all(&root, CATALOG_ITEM_SELECTOR)?,
            stats: query_all(&root, STAT_SELECTOR)?,
            sections: query_all(&root, SECTION_SELECTOR)?,
            fragment_links: query_all(&root, FRAGMENT_LINK_SELECTOR)?,
            hero_title: root.query_selector(HERO_TITLE_SELECTOR)?.and_then(|el| el.dyn_into().ok()),
            menu_toggle,
            nav_links,
            modal,
            body,
            document,
            window,
        })
    }
}

/// Watch `elements` for viewport intersection, calling `handler` per entry.
pub fn observe_intersections<F>(
    elements: &[HtmlElement],
    threshold: f64,
    root_margin: &str,
    mut handler: F,
) -> Result<web_sys::IntersectionObserver, FolioError>
where
    F: FnMut(&web_sys::IntersectionObserverEntry, &web_sys::IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        },
    );
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}
