// Host-side tests for the drag gesture tracker.

use app_core::PanTracker;
use glam::Vec2;

#[test]
fn idle_translation_is_idempotent() {
    let tracker = PanTracker::new();
    for _ in 0..5 {
        assert_eq!(tracker.translation(), Vec2::ZERO);
    }
    assert!(!tracker.is_dragging());
}

#[test]
fn drag_follows_cumulative_deltas() {
    let mut tracker = PanTracker::new();
    tracker.begin();
    assert!(tracker.is_dragging());

    // Deltas are cumulative since the grant, not per-event increments
    tracker.update(Vec2::new(3.0, -2.0));
    assert_eq!(tracker.translation(), Vec2::new(3.0, -2.0));
    tracker.update(Vec2::new(10.0, 5.0));
    assert_eq!(tracker.translation(), Vec2::new(10.0, 5.0));
}

#[test]
fn release_flattens_the_final_delta_exactly() {
    let mut tracker = PanTracker::new();
    tracker.begin();
    tracker.update(Vec2::new(7.5, -1.25));
    tracker.update(Vec2::new(12.0, 4.0));
    tracker.release();

    assert!(!tracker.is_dragging());
    assert_eq!(tracker.translation(), Vec2::new(12.0, 4.0));
}

#[test]
fn second_drag_resumes_from_flattened_baseline() {
    let mut tracker = PanTracker::new();
    tracker.begin();
    tracker.update(Vec2::new(4.0, 4.0));
    tracker.release();
    assert_eq!(tracker.translation(), Vec2::new(4.0, 4.0));

    // A new gesture composes on top of the baseline, not (0, 0)
    tracker.begin();
    assert_eq!(
        tracker.translation(),
        Vec2::new(4.0, 4.0),
        "grant must not move the region"
    );
    tracker.update(Vec2::new(1.0, -1.0));
    assert_eq!(tracker.translation(), Vec2::new(5.0, 3.0));
    tracker.release();
    assert_eq!(tracker.translation(), Vec2::new(5.0, 3.0));
}

#[test]
fn move_without_grant_is_ignored() {
    let mut tracker = PanTracker::new();
    tracker.update(Vec2::new(100.0, 100.0));
    assert_eq!(tracker.translation(), Vec2::ZERO);
    assert!(!tracker.is_dragging());
}

#[test]
fn release_without_grant_is_a_noop() {
    let mut tracker = PanTracker::new();
    tracker.release();
    assert_eq!(tracker.translation(), Vec2::ZERO);
    assert!(!tracker.is_dragging());
}

#[test]
fn second_grant_while_dragging_is_ignored() {
    let mut tracker = PanTracker::new();
    tracker.begin();
    tracker.update(Vec2::new(5.0, 0.0));

    // First gesture wins; the live delta survives the spurious grant
    tracker.begin();
    assert!(tracker.is_dragging());
    assert_eq!(tracker.translation(), Vec2::new(5.0, 0.0));

    tracker.release();
    assert_eq!(tracker.translation(), Vec2::new(5.0, 0.0));
}

#[test]
fn translation_is_continuous_across_transitions() {
    let mut tracker = PanTracker::new();
    tracker.begin();
    tracker.update(Vec2::new(-3.0, 8.0));
    let before_release = tracker.translation();
    tracker.release();
    assert_eq!(tracker.translation(), before_release);

    let before_grant = tracker.translation();
    tracker.begin();
    assert_eq!(tracker.translation(), before_grant);
}
