use std::cell::RefCell;

use serde_json::Value;

use super::*;

/// Captures events for assertions instead of logging them.
struct RecordingSink {
    events: RefCell<Vec<(String, Value)>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }
}

impl TelemetrySink for RecordingSink {
    fn track(&self, event: &str, data: Value) {
        self.events.borrow_mut().push((event.to_string(), data));
    }
}

#[test]
fn button_click_payload_trims_text_and_defaults_section() {
    let payload = button_click_payload("  Get Started \n", None);
    assert_eq!(payload["button_text"], "Get Started");
    assert_eq!(payload["section"], "unknown");
}

#[test]
fn button_click_payload_carries_section_id() {
    let payload = button_click_payload("Contact Sales", Some("pricing"));
    assert_eq!(payload["section"], "pricing");
}

#[test]
fn payload_structs_serialize_to_the_wire_shape() {
    let click = serde_json::to_value(ButtonClick {
        button_text: "Get Started",
        section: "hero",
    })
    .unwrap();
    assert_eq!(
        click,
        serde_json::json!({ "button_text": "Get Started", "section": "hero" })
    );

    let depth = serde_json::to_value(ScrollDepth { depth: 50 }).unwrap();
    assert_eq!(depth, serde_json::json!({ "depth": 50 }));
}

#[test]
fn scroll_depth_payload_is_numeric() {
    assert_eq!(scroll_depth_payload(75), serde_json::json!({ "depth": 75 }));
}

#[test]
fn sink_receives_named_events_in_order() {
    let sink = RecordingSink::new();
    sink.track(SCROLL_DEPTH_EVENT, scroll_depth_payload(25));
    sink.track(BUTTON_CLICK_EVENT, button_click_payload("Get Started", Some("hero")));

    let events = sink.events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, SCROLL_DEPTH_EVENT);
    assert_eq!(events[0].1["depth"], 25);
    assert_eq!(events[1].0, BUTTON_CLICK_EVENT);
    assert_eq!(events[1].1["section"], "hero");
}
