//! Scroll-driven styling: navbar, reveals, stat counters, scroll-to-top.
//!
//! ARCHITECTURE
//! ============
//! One window `scroll` listener feeds the [`ScrollState`] signal. Navbar
//! styling and the scroll-to-top control are effects over that signal (and
//! the theme signal). Reveals and counters are driven by intersection
//! observers rather than scroll offsets.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::consts::*;
use crate::error::FolioError;
use crate::state::counter::{CounterAnimation, CounterTarget};
use crate::state::reveal::{REVEAL_GROUPS, RevealAction, RevealVariant, reveal_action, stagger_delay};
use crate::state::scroll::{ScrollState, navbar_style, scroll_top_visible};
use crate::state::theme::ThemeState;
use crate::util::dom::{PageElements, listen, observe_intersections, query_all, scroll_offset, set_class, set_style};
use crate::util::tasks::{TaskRegistry, retire_interval};

pub fn install(
    page: &PageElements,
    config: &SiteConfig,
    scroll: RwSignal<ScrollState>,
    theme: RwSignal<ThemeState>,
) -> Result<(), FolioError> {
    install_navbar(page, config, scroll, theme);
    let parts = [
        ("scroll tracking", install_scroll_tracking(page, scroll)),
        ("scroll-top", install_scroll_top(page, config, scroll)),
        ("reveal", install_reveals(page, config)),
        ("counters", install_counters(page, config)),
    ];
    let mut first_failure = None;
    for (name, result) in parts {
        if let Err(err) = result {
            log::warn!("scroll: {name} not installed: {err}");
            if first_failure.is_none() {
                first_failure = Some(err);
            }
        }
    }
    first_failure.map_or(Ok(()), Err)
}

fn install_scroll_tracking(page: &PageElements, scroll: RwSignal<ScrollState>) -> Result<(), FolioError> {
    for event in ["scroll", "load"] {
        let window = page.window.clone();
        listen(&page.window, event, move |_: Event| {
            let mut next = scroll.get_untracked();
            if next.set_offset(scroll_offset(&window)) {
                scroll.set(next);
            }
        })?;
    }
    Ok(())
}

fn install_navbar(page: &PageElements, config: &SiteConfig, scroll: RwSignal<ScrollState>, theme: RwSignal<ThemeState>) {
    let navbar = page.navbar.clone();
    let threshold = config.navbar_scroll_threshold_px;
    Effect::new(move || {
        let style = navbar_style(scroll.get().offset, theme.with(|t| t.theme), threshold);
        set_style(&navbar, "background", style.background);
        set_style(&navbar, "box-shadow", style.box_shadow);
    });
}

fn install_scroll_top(page: &PageElements, config: &SiteConfig, scroll: RwSignal<ScrollState>) -> Result<(), FolioError> {
    let Some(control) = page.scroll_top.clone() else {
        log::debug!("scroll-top control absent; skipping");
        return Ok(());
    };

    let threshold = config.scroll_top_threshold_px;
    let shown = control.clone();
    Effect::new(move || {
        set_class(&shown, VISIBLE_CLASS, scroll_top_visible(scroll.get().offset, threshold));
    });

    let window = page.window.clone();
    listen(&control, "click", move |_: MouseEvent| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
}

fn install_reveals(page: &PageElements, config: &SiteConfig) -> Result<(), FolioError> {
    let root = page.document.document_element().ok_or(FolioError::MissingElement("html"))?;
    let variant = config.reveal_variant;

    let mut groups = Vec::new();
    for group in REVEAL_GROUPS {
        let elements: Vec<HtmlElement> = query_all(&root, group.selector)?;
        groups.push((group.stagger_step_s, elements));
    }
    let watched: Vec<HtmlElement> = groups.iter().flat_map(|(_, elements)| elements.iter().cloned()).collect();
    if watched.is_empty() {
        return Ok(());
    }

    // Content is only hidden once an observer exists to reveal it again.
    observe_intersections(&watched, config.reveal_threshold, &config.reveal_root_margin, move |entry, observer| {
        let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
            return;
        };
        match reveal_action(variant, entry.is_intersecting()) {
            RevealAction::ShowOnce => {
                set_style(&target, "opacity", "1");
                set_style(&target, "transform", REVEAL_SHOWN_TRANSFORM);
                observer.unobserve(&target);
            }
            RevealAction::MarkIn => {
                set_class(&target, REVEAL_OUT_CLASS, false);
                set_class(&target, REVEAL_IN_CLASS, true);
            }
            RevealAction::MarkOut => {
                set_class(&target, REVEAL_IN_CLASS, false);
                set_class(&target, REVEAL_OUT_CLASS, true);
            }
            RevealAction::Ignore => {}
        }
    })?;

    for (stagger_step_s, elements) in &groups {
        for (index, element) in elements.iter().enumerate() {
            match variant {
                RevealVariant::OneShot => {
                    set_style(element, "opacity", "0");
                    set_style(element, "transform", REVEAL_HIDDEN_TRANSFORM);
                    set_style(element, "transition", REVEAL_TRANSITION);
                }
                RevealVariant::Bidirectional => set_class(element, REVEAL_OUT_CLASS, true),
            }
            if let Some(delay) = stagger_delay(index, *stagger_step_s) {
                set_style(element, "transition-delay", &delay);
            }
        }
    }
    log::debug!("reveal: watching {} elements ({variant:?})", watched.len());
    Ok(())
}

fn install_counters(page: &PageElements, config: &SiteConfig) -> Result<(), FolioError> {
    if page.stats.is_empty() {
        return Ok(());
    }
    let stats = page.stats.clone();
    let running: Rc<RefCell<TaskRegistry<usize, Interval>>> = Rc::new(RefCell::new(TaskRegistry::new()));

    observe_intersections(&page.stats, config.stats_threshold, "0px", move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        observer.unobserve(&target);
        let target_node: &web_sys::Node = &target;
        let Some(index) = stats.iter().position(|stat| stat.is_same_node(Some(target_node))) else {
            return;
        };
        let element = stats[index].clone();
        let text = element.text_content().unwrap_or_default();
        let counter = match CounterTarget::parse(&text) {
            Ok(counter) => counter,
            Err(err) => {
                log::warn!("counter: {err}");
                return;
            }
        };

        let mut animation = CounterAnimation::new(counter);
        let registry = Rc::clone(&running);
        let interval = Interval::new(COUNTER_TICK_MS, move || {
            let frame = animation.tick();
            element.set_text_content(Some(&frame.text));
            if frame.done {
                if let Some(finished) = registry.borrow_mut().finish(&index) {
                    retire_interval(finished);
                }
            }
        });
        running.borrow_mut().schedule(index, interval);
    })?;
    Ok(())
}
