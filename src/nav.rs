//! Mobile menu state and in-page anchor scrolling.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::HEADER_CLEARANCE_PX;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class carried by the menu container and its trigger while open.
const ACTIVE_CLASS: &str = "active";

/// Mobile menu state. The DOM mirror is the `active` class held (or not)
/// by both the menu container and its trigger, always in lockstep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Unconditionally closed; a no-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Scroll destination for an anchor target, leaving room for the fixed
/// header.
#[must_use]
pub fn scroll_target(offset_top: i32) -> f64 {
    f64::from(offset_top) - HEADER_CLEARANCE_PX
}

/// Drives the mobile menu and smooth scrolling to page sections.
pub struct NavController {
    window: Window,
    document: Document,
    menu: Element,
    trigger: Element,
    state: Cell<MenuState>,
}

impl NavController {
    #[must_use]
    pub fn new(window: Window, document: Document, menu: Element, trigger: Element) -> Self {
        Self {
            window,
            document,
            menu,
            trigger,
            state: Cell::new(MenuState::default()),
        }
    }

    /// Flip the menu open or closed, keeping both active markers in sync.
    pub fn toggle_menu(&self) {
        let mut state = self.state.get();
        state.toggle();
        self.state.set(state);
        self.sync();
    }

    /// Force the menu closed. Safe to call when already closed.
    pub fn close_menu(&self) {
        let mut state = self.state.get();
        state.close();
        self.state.set(state);
        self.sync();
    }

    /// Animated scroll to the section addressed by `href`, clearing the
    /// fixed header. An unknown target is a silent no-op; either way the
    /// mobile menu closes afterwards.
    pub fn scroll_to_section(&self, href: &str) {
        if let Ok(Some(section)) = self.document.query_selector(href) {
            if let Some(section) = section.dyn_ref::<HtmlElement>() {
                let options = ScrollToOptions::new();
                options.set_top(scroll_target(section.offset_top()));
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
        }
        self.close_menu();
    }

    /// Whether a click landed on the trigger or inside the menu. Clicks
    /// anywhere else dismiss the menu.
    #[must_use]
    pub fn contains_event_target(&self, target: Option<&EventTarget>) -> bool {
        let Some(node) = target.and_then(|t| t.dyn_ref::<Node>()) else {
            return false;
        };
        self.trigger.contains(Some(node)) || self.menu.contains(Some(node))
    }

    fn sync(&self) {
        let open = self.state.get().is_open();
        for element in [&self.menu, &self.trigger] {
            let classes = element.class_list();
            if open {
                let _ = classes.add_1(ACTIVE_CLASS);
            } else {
                let _ = classes.remove_1(ACTIVE_CLASS);
            }
        }
    }
}
