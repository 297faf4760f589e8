//! Shared web-sys lookup helpers.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList, Storage};

/// Look up an element the page cannot function without. Absence aborts
/// setup with a descriptive error.
pub fn require_element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing required element #{id}")))
}

/// Like [`require_element_by_id`] for selector-addressed elements.
pub fn require_query(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing required element {selector}")))
}

/// Every element matching `selector`, or empty when nothing matches.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// [`query_all`] scoped to a subtree.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Browser localStorage, when the environment grants access to it.
pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
