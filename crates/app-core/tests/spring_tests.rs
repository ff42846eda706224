// Host-side tests for the spring trajectory and the toggle-driven animator.

use app_core::{
    lerp, lerp_rgb, Spring, SpringConfig, ToggleAnimator, BOX_COLOR_ACTIVE, BOX_COLOR_REST,
    BOX_ROTATION_ACTIVE, BOX_SCALE_ACTIVE, BOX_SCALE_REST,
};
use std::time::Duration;

// One 60 Hz display frame
const FRAME: Duration = Duration::from_micros(16_667);

#[test]
fn spring_settles_to_target_in_finite_ticks() {
    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    spring.set_target(1.0);

    let mut ticks = 0;
    while !spring.is_settled() && ticks < 2000 {
        spring.step(FRAME);
        ticks += 1;
    }
    assert!(spring.is_settled(), "spring did not settle within 2000 ticks");
    assert_eq!(spring.value(), 1.0, "settling must snap to the target");
    assert!(ticks > 10, "expected a visible transient, settled in {ticks}");
}

#[test]
fn spring_transient_overshoot_is_bounded() {
    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    spring.set_target(1.0);

    let mut max_value = 0.0f32;
    for _ in 0..2000 {
        spring.step(FRAME);
        max_value = max_value.max(spring.value());
        if spring.is_settled() {
            break;
        }
    }
    assert!(spring.is_settled());
    assert!(
        max_value < 1.25,
        "underdamped transient exceeded bound: {max_value}"
    );
}

#[test]
fn spring_step_is_a_noop_once_settled() {
    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    spring.set_target(1.0);
    while !spring.is_settled() {
        spring.step(FRAME);
    }
    for _ in 0..10 {
        spring.step(FRAME);
        assert_eq!(spring.value(), 1.0);
    }
}

#[test]
fn new_spring_starts_settled_at_its_value() {
    let spring = Spring::new(SpringConfig::default(), 0.25);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 0.25);
    assert_eq!(spring.target(), 0.25);
}

#[test]
fn retarget_mid_flight_turns_back_without_settling_first() {
    let mut animator = ToggleAnimator::new(SpringConfig::default());
    animator.toggle();
    assert!(animator.active());

    // Part-way toward 1, toggle back before settlement
    for _ in 0..10 {
        animator.tick(FRAME);
    }
    assert!(!animator.is_settled(), "should still be mid-flight");
    let at_retarget = animator.progress();
    assert!(at_retarget > 0.0 && at_retarget < 1.0);

    animator.toggle();
    assert!(!animator.active());

    let mut ticks = 0;
    let mut max_after = at_retarget;
    while !animator.is_settled() && ticks < 4000 {
        animator.tick(FRAME);
        max_after = max_after.max(animator.progress());
        ticks += 1;
    }
    assert!(animator.is_settled(), "retargeted spring never settled");
    assert_eq!(animator.progress(), 0.0);
    // Momentum may carry it slightly further before it turns around
    assert!(
        max_after < 1.25,
        "return trajectory exceeded bound: {max_after}"
    );
}

#[test]
fn toggle_flips_the_flag_each_time() {
    let mut animator = ToggleAnimator::new(SpringConfig::default());
    assert!(!animator.active());
    animator.toggle();
    assert!(animator.active());
    animator.toggle();
    assert!(!animator.active());
}

#[test]
fn derived_channels_stay_within_endpoint_bounds() {
    for i in 0..=100 {
        let s = i as f32 / 100.0;
        let scale = lerp(BOX_SCALE_REST, BOX_SCALE_ACTIVE, s);
        assert!(
            (BOX_SCALE_REST..=BOX_SCALE_ACTIVE).contains(&scale),
            "scale out of bounds at s={s}: {scale}"
        );
        let rotation = lerp(0.0, BOX_ROTATION_ACTIVE, s);
        assert!(
            (0.0..=BOX_ROTATION_ACTIVE).contains(&rotation),
            "rotation out of bounds at s={s}: {rotation}"
        );
        let color = lerp_rgb(BOX_COLOR_REST, BOX_COLOR_ACTIVE, s);
        for ch in 0..3 {
            let lo = BOX_COLOR_REST[ch].min(BOX_COLOR_ACTIVE[ch]);
            let hi = BOX_COLOR_REST[ch].max(BOX_COLOR_ACTIVE[ch]);
            assert!(
                color[ch] >= lo - 1e-6 && color[ch] <= hi + 1e-6,
                "color channel {ch} out of bounds at s={s}: {}",
                color[ch]
            );
        }
    }
}

#[test]
fn color_interpolation_hits_both_endpoints() {
    assert_eq!(lerp_rgb(BOX_COLOR_REST, BOX_COLOR_ACTIVE, 0.0), BOX_COLOR_REST);
    let active = lerp_rgb(BOX_COLOR_REST, BOX_COLOR_ACTIVE, 1.0);
    for ch in 0..3 {
        assert!((active[ch] - BOX_COLOR_ACTIVE[ch]).abs() < 1e-6);
    }
}

#[test]
fn resting_visual_matches_rest_endpoints() {
    let animator = ToggleAnimator::new(SpringConfig::default());
    let v = animator.visual();
    assert_eq!(v.scale, BOX_SCALE_REST);
    assert_eq!(v.rotation_y, 0.0);
    assert_eq!(v.lift, BOX_SCALE_REST);
    assert_eq!(v.color, BOX_COLOR_REST);
}

#[test]
fn settled_active_visual_matches_active_endpoints() {
    let mut animator = ToggleAnimator::new(SpringConfig::default());
    animator.toggle();
    let mut ticks = 0;
    while !animator.is_settled() && ticks < 4000 {
        animator.tick(FRAME);
        ticks += 1;
    }
    assert!(animator.is_settled());
    let v = animator.visual();
    assert_eq!(v.scale, BOX_SCALE_ACTIVE);
    assert_eq!(v.rotation_y, BOX_ROTATION_ACTIVE);
    assert_eq!(v.lift, BOX_SCALE_ACTIVE);
    for ch in 0..3 {
        assert!((v.color[ch] - BOX_COLOR_ACTIVE[ch]).abs() < 1e-6);
    }
}

#[test]
fn lift_rides_the_same_ramp_as_scale() {
    let mut animator = ToggleAnimator::new(SpringConfig::default());
    animator.toggle();
    for _ in 0..15 {
        animator.tick(FRAME);
        let v = animator.visual();
        assert_eq!(v.scale, v.lift);
    }
}
