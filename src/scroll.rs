//! Scroll-reactive behavior: handler throttling, navbar styling, and the
//! scroll-depth watermark.
//!
//! DESIGN
//! ======
//! Time is passed into [`Throttle::allow`] rather than read inside it, so
//! the drop-not-queue semantics are testable without a browser clock (the
//! depth math is likewise plain arithmetic). The callers in `page` feed in
//! `js_sys::Date::now()`.

use crate::consts::{DEPTH_MILESTONE_STEP, NAVBAR_SCROLL_THRESHOLD_PX};

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Leading-edge throttle. The first call in a window runs; later calls
/// inside the window are dropped, not queued or coalesced.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: f64,
    open_at_ms: f64,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            open_at_ms: f64::NEG_INFINITY,
        }
    }

    /// Whether a call arriving at `now_ms` may run.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        if now_ms >= self.open_at_ms {
            self.open_at_ms = now_ms + self.window_ms;
            true
        } else {
            false
        }
    }
}

/// Navbar background for a given scroll offset and theme. Past the
/// threshold the bar gets an opaque tint; at the top it falls back to the
/// theme's background token.
#[must_use]
pub fn navbar_background(scroll_y: f64, dark: bool) -> &'static str {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD_PX {
        if dark {
            "rgba(17, 24, 39, 0.95)"
        } else {
            "rgba(255, 255, 255, 0.95)"
        }
    } else {
        "var(--background)"
    }
}

/// Maximum scroll depth reached, as a percentage watermark. Only moves
/// upward; reset on page reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthTracker {
    max_percent: u32,
}

impl DepthTracker {
    /// Percentage of the scrollable span covered by `scroll_y`, rounded and
    /// clamped to 0..=100. A page with no scrollable span reads as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> u32 {
        let span = scroll_height - viewport_height;
        if span <= 0.0 {
            return 0;
        }
        (scroll_y / span * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Record a newly observed depth. Returns the raised watermark when the
    /// raise lands exactly on a milestone boundary.
    pub fn record(&mut self, percent: u32) -> Option<u32> {
        if percent > self.max_percent {
            self.max_percent = percent;
            if self.max_percent % DEPTH_MILESTONE_STEP == 0 {
                return Some(self.max_percent);
            }
        }
        None
    }

    #[must_use]
    pub fn max_percent(self) -> u32 {
        self.max_percent
    }
}
