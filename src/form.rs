//! Required-field validation for forms added to the page later.

use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Whitespace-only counts as blank.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Highlight blank required fields and report overall validity.
pub fn validate_form(form: &HtmlFormElement) -> bool {
    let mut valid = true;
    for field in dom::query_all_within(form, "input[required], textarea[required]") {
        let (value, style) = if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            (input.value(), input.style())
        } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            (area.value(), area.style())
        } else {
            continue;
        };

        if is_blank(&value) {
            let _ = style.set_property("border-color", "var(--primary-color)");
            valid = false;
        } else {
            let _ = style.remove_property("border-color");
        }
    }
    valid
}
