//! Hero title typing effect and cursor-follow glow on catalog items.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::MouseEvent;

use crate::config::SiteConfig;
use crate::consts::HERO_TITLE_SELECTOR;
use crate::error::FolioError;
use crate::state::hero::{Typewriter, pointer_offset};
use crate::util::dom::{PageElements, listen};
use crate::util::tasks::{TaskRegistry, retire_interval};

pub fn install(page: &PageElements, config: &SiteConfig) -> Result<(), FolioError> {
    if config.typing.enabled {
        if let Some(title) = page.hero_title.clone() {
            start_typing(title, config.typing.start_delay_ms, config.typing.char_interval_ms);
        }
    }

    for item in &page.catalog_items {
        let glow = item.clone();
        listen(item, "mousemove", move |ev: MouseEvent| {
            let rect = glow.get_bounding_client_rect();
            let (x, y) = pointer_offset((f64::from(ev.client_x()), f64::from(ev.client_y())), (rect.left(), rect.top()));
            let style = glow.style();
            if let Err(err) = style.set_property("--mouse-x", &x).and_then(|()| style.set_property("--mouse-y", &y)) {
                log::warn!("hero: cursor glow update failed: {err:?}");
            }
        })?;
    }
    Ok(())
}

fn start_typing(title: web_sys::HtmlElement, start_delay_ms: u32, char_interval_ms: u32) {
    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    let running: Rc<RefCell<TaskRegistry<&'static str, Interval>>> = Rc::new(RefCell::new(TaskRegistry::new()));

    Timeout::new(start_delay_ms, move || {
        let mut writer = Typewriter::new(&text);
        if let Some(prefix) = writer.tick() {
            title.set_text_content(Some(&prefix));
        }
        if writer.is_finished() {
            return;
        }
        let registry = Rc::clone(&running);
        let interval = Interval::new(char_interval_ms, move || {
            if let Some(prefix) = writer.tick() {
                title.set_text_content(Some(&prefix));
            }
            if writer.is_finished() {
                if let Some(finished) = registry.borrow_mut().finish(&HERO_TITLE_SELECTOR) {
                    retire_interval(finished);
                }
            }
        });
        running.borrow_mut().schedule(HERO_TITLE_SELECTOR, interval);
    })
    .forget();
}
