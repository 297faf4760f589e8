//! Client-side behavior for the TechFlow Pro marketing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The page
//! markup is static and served as-is; this module attaches all of its
//! behavior after load: theme switching, the mobile menu, smooth anchor
//! scrolling, scroll-reactive navbar styling, entrance animations, click
//! telemetry, and service worker registration.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Page controller: element lookup, listener wiring, lifecycle |
//! | [`theme`] | Light/dark theme state and persistence |
//! | [`nav`] | Mobile menu state and in-page anchor scrolling |
//! | [`scroll`] | Throttling, navbar styling, scroll-depth watermark |
//! | [`reveal`] | Viewport-intersection entrance animation for cards |
//! | [`track`] | Telemetry sink and event payloads |
//! | [`intent`] | Call-to-action button intents and their messages |
//! | [`notify`] | Non-blocking user notifications |
//! | [`form`] | Required-field validation for future forms |
//! | [`worker`] | Background service worker registration |
//! | [`dom`] | Shared web-sys lookup helpers |
//! | [`consts`] | Fixed thresholds, selectors, and timings |

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod consts;
pub mod dom;
pub mod form;
pub mod intent;
pub mod nav;
pub mod notify;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod track;
pub mod worker;

use crate::page::Page;

thread_local! {
    /// Keeps the mounted page (and the closures it retains) alive for the
    /// lifetime of the document.
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Module entry point: install logging, then wire up the page.
///
/// A missing required element aborts setup here; nothing after the failing
/// lookup is wired.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let page = Page::mount(&window)?;
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
    Ok(())
}

/// Tear the page down again, removing every listener and observer. Exposed
/// for embedding hosts that unload the script without a full navigation.
#[wasm_bindgen]
pub fn stop() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.unmount();
    }
}
