use super::*;

// =============================================================
// Throttle
// =============================================================

#[test]
fn first_call_runs_immediately() {
    let mut throttle = Throttle::new(16.0);
    assert!(throttle.allow(0.0));
}

#[test]
fn calls_inside_the_window_are_dropped() {
    let mut throttle = Throttle::new(16.0);
    assert!(throttle.allow(0.0));
    assert!(!throttle.allow(5.0));
    assert!(throttle.allow(20.0));
}

#[test]
fn dropped_calls_are_not_queued() {
    let mut throttle = Throttle::new(1000.0);
    assert!(throttle.allow(0.0));
    for now in [1.0, 500.0, 999.0] {
        assert!(!throttle.allow(now));
    }
    // The window reopens based on the first call, not the dropped ones.
    assert!(throttle.allow(1000.0));
}

// =============================================================
// Navbar background
// =============================================================

#[test]
fn at_or_below_threshold_uses_theme_token() {
    assert_eq!(navbar_background(0.0, false), "var(--background)");
    assert_eq!(navbar_background(50.0, false), "var(--background)");
    assert_eq!(navbar_background(50.0, true), "var(--background)");
}

#[test]
fn past_threshold_tints_by_theme() {
    assert_eq!(navbar_background(51.0, false), "rgba(255, 255, 255, 0.95)");
    assert_eq!(navbar_background(51.0, true), "rgba(17, 24, 39, 0.95)");
}

// =============================================================
// Depth tracking
// =============================================================

#[test]
fn unscrollable_page_reads_as_zero() {
    assert_eq!(DepthTracker::percent(100.0, 600.0, 600.0), 0);
    assert_eq!(DepthTracker::percent(100.0, 500.0, 600.0), 0);
}

#[test]
fn percent_is_clamped_to_valid_range() {
    // Overscroll bounce can push scroll_y past the span.
    assert_eq!(DepthTracker::percent(2000.0, 1600.0, 600.0), 100);
    assert_eq!(DepthTracker::percent(-50.0, 1600.0, 600.0), 0);
}

#[test]
fn percent_rounds_to_nearest() {
    assert_eq!(DepthTracker::percent(499.0, 1600.0, 600.0), 50);
    assert_eq!(DepthTracker::percent(494.0, 1600.0, 600.0), 49);
}

#[test]
fn watermark_never_decreases() {
    let mut tracker = DepthTracker::default();
    for percent in [10, 40, 30, 5, 40, 12] {
        tracker.record(percent);
    }
    assert_eq!(tracker.max_percent(), 40);
}

#[test]
fn milestone_fires_exactly_on_a_multiple_of_25() {
    let mut tracker = DepthTracker::default();
    assert_eq!(tracker.record(24), None);
    assert_eq!(tracker.record(25), Some(25));
    assert_eq!(tracker.record(26), None);
    // Re-reaching the watermark is not a raise.
    assert_eq!(tracker.record(25), None);
}

#[test]
fn milestone_is_skipped_when_the_watermark_jumps_over_it() {
    let mut tracker = DepthTracker::default();
    assert_eq!(tracker.record(60), None);
    assert_eq!(tracker.record(75), Some(75));
    assert_eq!(tracker.record(100), Some(100));
}
