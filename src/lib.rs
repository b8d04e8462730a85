//! # folio
//!
//! Leptos + WASM behavior layer for a single-page portfolio site.
//!
//! The page markup is served statically; this crate attaches behavior to it:
//! theme switching, the mobile navigation panel, scroll-driven styling and
//! reveals, stat counters, the project detail modal, and smooth in-page
//! scrolling.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure UI state models, one per concern, natively testable |
//! | [`config`] | Tunable site behavior loaded from an inline JSON blob |
//! | [`consts`] | CSS values, element ids, and animation timings |
//! | [`error`] | Crate error type |
//! | [`util`] | Storage and timer helpers, plus web-sys glue (browser build) |
//! | `controllers` | Signal-to-DOM bindings, one per UI concern (browser build) |
//! | [`app`] | Root component wiring state signals to controllers |

pub mod app;
pub mod config;
pub mod consts;
#[cfg(feature = "csr")]
pub mod controllers;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the behavior root.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("folio: logger already initialized");
    }
    leptos::mount::mount_to_body(app::FolioRoot);
}
