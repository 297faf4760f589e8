//! Viewport-intersection entrance animation for content cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;

/// Fades and slides cards into view once they approach the viewport.
///
/// Cards stay observed after their reveal, so a card that is re-hidden by a
/// later layout change re-animates when it next intersects.
pub struct Revealer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Revealer {
    /// Prime every card for animation and start observing.
    pub fn setup(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        reveal(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for card in dom::query_all(document, REVEAL_SELECTOR) {
            prime(&card);
            observer.observe(&card);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stop watching every observed element.
    pub fn teardown(&self) {
        self.observer.disconnect();
    }
}

/// Initial hidden state: transparent and shifted down, with the transition
/// that later carries the reveal.
fn prime(card: &Element) {
    if let Some(card) = card.dyn_ref::<HtmlElement>() {
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
    }
}

fn reveal(card: &Element) {
    if let Some(card) = card.dyn_ref::<HtmlElement>() {
        let style = card.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    }
}
