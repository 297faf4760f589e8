//! Fixed thresholds, selectors, and timings for the page behavior.

/// localStorage key holding the persisted theme (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "theme";

/// Toggle-control glyph while the light theme is active (the action leads
/// to dark).
pub const LIGHT_THEME_ICON_HTML: &str = "<i class=\"fas fa-moon\"></i>";

/// Toggle-control glyph while the dark theme is active.
pub const DARK_THEME_ICON_HTML: &str = "<i class=\"fas fa-sun\"></i>";

// ── Navbar ──────────────────────────────────────────────────────

/// Scroll offset in px past which the navbar gets an opaque tint.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fixed-navbar clearance subtracted from anchor scroll targets, in px.
pub const HEADER_CLEARANCE_PX: f64 = 70.0;

/// Throttle window for the navbar scroll handler, roughly one frame.
pub const NAVBAR_THROTTLE_MS: f64 = 16.0;

// ── Scroll depth ────────────────────────────────────────────────

/// Throttle window for scroll-depth sampling.
pub const DEPTH_THROTTLE_MS: f64 = 1000.0;

/// Milestone granularity for scroll-depth telemetry, in percent.
pub const DEPTH_MILESTONE_STEP: u32 = 25;

// ── Entrance reveal ─────────────────────────────────────────────

/// Cards that fade in on first approach to the viewport.
pub const REVEAL_SELECTOR: &str = ".feature-card, .testimonial-card, .pricing-card";

/// Visible fraction at which a card counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the bottom edge in so reveals start slightly before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Timings ─────────────────────────────────────────────────────

/// How long a clicked button stays scaled down, in ms.
pub const PRESS_FEEDBACK_MS: u32 = 150;

/// Delay before the body fades in after load, in ms.
pub const FADE_IN_DELAY_MS: u32 = 100;

/// How long a toast notification stays on screen, in ms.
pub const TOAST_DISMISS_MS: u32 = 4000;

/// Script URL for the background service worker.
pub const SERVICE_WORKER_URL: &str = "/sw.js";
