//! Telemetry sink and event payloads.

use serde::Serialize;
use serde_json::Value;

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

pub const BUTTON_CLICK_EVENT: &str = "button_click";
pub const SCROLL_DEPTH_EVENT: &str = "scroll_depth";

/// Destination for interaction telemetry. The production sink logs to the
/// console; a real analytics backend would slot in behind this trait.
pub trait TelemetrySink {
    fn track(&self, event: &str, data: Value);
}

/// Console-backed sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl TelemetrySink for ConsoleSink {
    fn track(&self, event: &str, data: Value) {
        log::info!("event tracked: {event} {data}");
    }
}

/// Wire shape of a `button_click` event: the trimmed label and the id of
/// the nearest enclosing section, `"unknown"` when there is none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonClick<'a> {
    pub button_text: &'a str,
    pub section: &'a str,
}

/// Wire shape of a `scroll_depth` milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScrollDepth {
    pub depth: u32,
}

#[must_use]
pub fn button_click_payload(button_text: &str, section_id: Option<&str>) -> Value {
    to_value(ButtonClick {
        button_text: button_text.trim(),
        section: section_id.unwrap_or("unknown"),
    })
}

#[must_use]
pub fn scroll_depth_payload(depth: u32) -> Value {
    to_value(ScrollDepth { depth })
}

fn to_value<T: Serialize>(payload: T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
