//! Light/dark theme state and persistence.
//!
//! Reads the visitor's preference from `localStorage` and mirrors it as a
//! body class; the toggle control flips both and writes the new preference
//! back. Unknown or missing stored values fall back to light.

use web_sys::{Element, HtmlElement};

use crate::consts::{DARK_THEME_ICON_HTML, LIGHT_THEME_ICON_HTML, THEME_STORAGE_KEY};
use crate::dom;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme for the page. The body carries exactly one of the two
/// theme classes at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything other than `"dark"` reads as
    /// light, including a missing entry.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The literal string written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Body class carried while this theme is active.
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Toggle-control glyph: a moon while light (the action leads to dark),
    /// a sun while dark.
    #[must_use]
    pub fn toggle_icon_html(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_THEME_ICON_HTML,
            Theme::Dark => DARK_THEME_ICON_HTML,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Applies theme state to the document body and the toggle control, and
/// keeps the persisted preference in sync on explicit toggles.
pub struct ThemeController {
    body: HtmlElement,
    toggle: Element,
}

impl ThemeController {
    #[must_use]
    pub fn new(body: HtmlElement, toggle: Element) -> Self {
        Self { body, toggle }
    }

    /// Apply the persisted theme (default light). Does not write storage;
    /// only an explicit toggle persists.
    pub fn initialize(&self) {
        self.apply(self.stored());
    }

    /// Flip to the opposite theme and persist the new preference. Class,
    /// icon, and storage are updated in one synchronous sequence.
    pub fn toggle(&self) {
        let next = self.current().toggled();
        self.apply(next);
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, next.as_str());
        }
    }

    /// The theme currently reflected by the body class.
    #[must_use]
    pub fn current(&self) -> Theme {
        if self.body.class_list().contains(Theme::Dark.body_class()) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn stored(&self) -> Theme {
        let raw = dom::local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(raw.as_deref())
    }

    fn apply(&self, theme: Theme) {
        let classes = self.body.class_list();
        let _ = classes.remove_1(theme.toggled().body_class());
        let _ = classes.add_1(theme.body_class());
        self.toggle.set_inner_html(theme.toggle_icon_html());
    }
}
