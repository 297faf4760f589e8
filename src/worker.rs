//! Background service worker registration.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Window;

use crate::consts::SERVICE_WORKER_URL;

/// Register the service worker, logging the outcome either way. Browsers
/// without service worker support are skipped silently; a failed
/// registration is never surfaced to the visitor.
pub fn register(window: &Window) {
    let navigator = window.navigator();
    let supported = Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return;
    }

    let container = navigator.service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register(SERVICE_WORKER_URL)).await {
            Ok(_) => log::info!("service worker registered at {SERVICE_WORKER_URL}"),
            Err(err) => log::warn!("service worker registration failed: {err:?}"),
        }
    });
}
