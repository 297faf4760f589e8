//! Page controller: element lookup, listener wiring, and lifecycle.
//!
//! DESIGN
//! ======
//! `Page::mount` resolves the handful of elements the page cannot work
//! without (failing setup when one is missing), builds the per-concern
//! controllers, and registers every listener. Each registration is kept as
//! a [`ListenerHandle`] so `unmount` can detach it again; dropping a
//! wasm-bindgen closure while the browser still holds the callback would
//! leave a dangling function behind.
//!
//! All handlers run on the single browser event loop, so shared state only
//! needs `Rc` plumbing (and closure-owned mutable state), not locks.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlFormElement, KeyboardEvent, Window};

use crate::consts::{DEPTH_THROTTLE_MS, FADE_IN_DELAY_MS, NAVBAR_THROTTLE_MS, PRESS_FEEDBACK_MS};
use crate::dom;
use crate::form;
use crate::intent::ButtonIntent;
use crate::nav::NavController;
use crate::notify::{Notifier, ToastNotifier};
use crate::reveal::Revealer;
use crate::scroll::{DepthTracker, Throttle, navbar_background};
use crate::theme::{Theme, ThemeController};
use crate::track::{
    BUTTON_CLICK_EVENT, ConsoleSink, SCROLL_DEPTH_EVENT, TelemetrySink, button_click_payload,
    scroll_depth_payload,
};

/// A registered DOM listener, detachable on unmount.
struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<ListenerHandle, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(ListenerHandle {
        target: target.clone(),
        event,
        callback,
    })
}

/// The mounted page: every listener, observer, and controller in one place.
pub struct Page {
    listeners: Vec<ListenerHandle>,
    revealer: Revealer,
}

impl Page {
    /// Resolve required elements and wire up all page behavior.
    ///
    /// Errors when `#theme-toggle`, `#nav-toggle`, `#nav-menu`, `.navbar`,
    /// or `<body>` is missing; the page is considered broken and nothing
    /// further is wired.
    pub fn mount(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document on window"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let theme_toggle = dom::require_element_by_id(&document, "theme-toggle")?;
        let nav_toggle = dom::require_element_by_id(&document, "nav-toggle")?;
        let nav_menu = dom::require_element_by_id(&document, "nav-menu")?;
        let navbar = dom::require_query(&document, ".navbar")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(".navbar is not an HTML element"))?;

        let theme = Rc::new(ThemeController::new(body.clone(), theme_toggle.clone()));
        theme.initialize();

        let nav = Rc::new(NavController::new(
            window.clone(),
            document.clone(),
            nav_menu,
            nav_toggle.clone(),
        ));

        let sink: Rc<dyn TelemetrySink> = Rc::new(ConsoleSink);
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(document.clone()));

        let mut listeners = Vec::new();

        listeners.push(listen(theme_toggle.as_ref(), "click", {
            let theme = Rc::clone(&theme);
            move |_event| theme.toggle()
        })?);

        listeners.push(listen(nav_toggle.as_ref(), "click", {
            let nav = Rc::clone(&nav);
            move |_event| nav.toggle_menu()
        })?);

        for link in dom::query_all(&document, ".nav-link") {
            listeners.push(listen(link.as_ref(), "click", {
                let nav = Rc::clone(&nav);
                let link = link.clone();
                move |event| {
                    event.prevent_default();
                    match link.get_attribute("href") {
                        Some(href) => nav.scroll_to_section(&href),
                        None => nav.close_menu(),
                    }
                }
            })?);
        }

        // Clicks outside both the trigger and the menu dismiss the menu.
        listeners.push(listen(document.as_ref(), "click", {
            let nav = Rc::clone(&nav);
            move |event| {
                let target = event.target();
                if !nav.contains_event_target(target.as_ref()) {
                    nav.close_menu();
                }
            }
        })?);

        listeners.push(listen(document.as_ref(), "keydown", {
            let nav = Rc::clone(&nav);
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() == "Escape" {
                    nav.close_menu();
                }
            }
        })?);

        listeners.push(listen(window.as_ref(), "scroll", {
            let mut throttle = Throttle::new(NAVBAR_THROTTLE_MS);
            let theme = Rc::clone(&theme);
            let window = window.clone();
            move |_event| {
                if !throttle.allow(Date::now()) {
                    return;
                }
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let dark = theme.current() == Theme::Dark;
                let _ = navbar
                    .style()
                    .set_property("background-color", navbar_background(scroll_y, dark));
            }
        })?);

        listeners.push(listen(window.as_ref(), "scroll", {
            let mut throttle = Throttle::new(DEPTH_THROTTLE_MS);
            let mut depth = DepthTracker::default();
            let sink = Rc::clone(&sink);
            let window = window.clone();
            let document = document.clone();
            move |_event| {
                if !throttle.allow(Date::now()) {
                    return;
                }
                let Some(body) = document.body() else {
                    return;
                };
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let percent =
                    DepthTracker::percent(scroll_y, f64::from(body.scroll_height()), viewport);
                if let Some(milestone) = depth.record(percent) {
                    sink.track(SCROLL_DEPTH_EVENT, scroll_depth_payload(milestone));
                }
            }
        })?);

        for button in dom::query_all(&document, ".btn") {
            let Ok(button) = button.dyn_into::<HtmlElement>() else {
                continue;
            };
            listeners.push(listen(button.as_ref(), "click", {
                let button = button.clone();
                let notifier = Rc::clone(&notifier);
                move |_event| {
                    press_feedback(&button);
                    let label = button.text_content().unwrap_or_default();
                    let attr = button.get_attribute("data-intent");
                    match ButtonIntent::resolve(attr.as_deref(), &label) {
                        Some(intent) => notifier.notify(intent.message()),
                        None => log::debug!("button clicked: {}", label.trim()),
                    }
                }
            })?);
        }

        // Delegated telemetry for anything styled as a button, including
        // elements added after mount.
        listeners.push(listen(document.as_ref(), "click", {
            let sink = Rc::clone(&sink);
            move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                if !target.class_list().contains("btn") {
                    return;
                }
                let text = target.text_content().unwrap_or_default();
                let section = target
                    .closest("section")
                    .ok()
                    .flatten()
                    .map(|section| section.id())
                    .filter(|id| !id.is_empty());
                sink.track(BUTTON_CLICK_EVENT, button_click_payload(&text, section.as_deref()));
            }
        })?);

        listeners.push(listen(document.as_ref(), "submit", {
            move |event| {
                let Some(form) = event.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
                else {
                    return;
                };
                if !form::validate_form(&form) {
                    event.prevent_default();
                }
            }
        })?);

        let revealer = Revealer::setup(&document)?;

        fade_in(&body);
        crate::worker::register(window);
        log::info!("TechFlow Pro landing page loaded");

        Ok(Self { listeners, revealer })
    }

    /// Detach every listener and disconnect the intersection observer.
    pub fn unmount(self) {
        for listener in &self.listeners {
            listener.detach();
        }
        self.revealer.teardown();
    }
}

/// Brief press feedback: scale down, restore after a beat.
fn press_feedback(button: &HtmlElement) {
    let _ = button.style().set_property("transform", "scale(0.95)");
    let button = button.clone();
    Timeout::new(PRESS_FEEDBACK_MS, move || {
        let _ = button.style().remove_property("transform");
    })
    .forget();
}

/// Fade the body in shortly after load.
fn fade_in(body: &HtmlElement) {
    let _ = body.style().set_property("opacity", "0");
    let body = body.clone();
    Timeout::new(FADE_IN_DELAY_MS, move || {
        let style = body.style();
        let _ = style.set_property("transition", "opacity 0.5s ease");
        let _ = style.set_property("opacity", "1");
    })
    .forget();
}
