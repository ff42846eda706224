//! Damped spring trajectory and the toggle-driven box animation built on it.
//!
//! One scalar spring value moves between 0 and 1 whenever the active flag
//! flips; scale, rotation, lift, and color are pure functions of that value.

use crate::constants::{
    BOX_COLOR_ACTIVE, BOX_COLOR_REST, BOX_ROTATION_ACTIVE, BOX_SCALE_ACTIVE, BOX_SCALE_REST,
};
use glam::{Mat4, Vec3};
use std::time::Duration;

/// Spring parameters: mass, stiffness, damping, and the settle threshold.
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 5.0,
            tension: 400.0,
            friction: 50.0,
            precision: 0.0001,
        }
    }
}

// Fixed integration substep; frame deltas are split into steps of this size
// so settle behavior does not depend on the display's refresh rate.
const SUBSTEP_SEC: f32 = 0.001;

/// Scalar value evolving under damped second-order dynamics toward a target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
            settled: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Retarget the trajectory. Current value and velocity carry over, so a
    /// retarget mid-flight turns around without settling first.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = false;
    }

    /// Advance one frame. Idempotent once settled until the target changes.
    pub fn step(&mut self, dt: Duration) {
        if self.settled {
            return;
        }
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 && !self.settled {
            let h = remaining.min(SUBSTEP_SEC);
            let accel = (self.config.tension * (self.target - self.value)
                - self.config.friction * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
            if (self.target - self.value).abs() < self.config.precision
                && self.velocity.abs() < self.config.precision
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
            }
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
    ]
}

/// Snapshot of the animated channels for one frame.
#[derive(Clone, Copy, Debug)]
pub struct BoxVisual {
    /// Applied to the X and Z axes; Y stays at 1.
    pub scale: f32,
    /// Radians about Y.
    pub rotation_y: f32,
    /// World-space Y of the group; rides the same ramp as the scale.
    pub lift: f32,
    pub color: [f32; 3],
}

impl BoxVisual {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.lift, 0.0))
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::new(self.scale, 1.0, self.scale))
    }
}

/// Maps a click-toggled boolean through a spring into the box's channels.
pub struct ToggleAnimator {
    spring: Spring,
    active: bool,
}

impl ToggleAnimator {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, 0.0),
            active: false,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Trajectory value; nominally in [0, 1] with a brief underdamped
    /// transient past the endpoints.
    pub fn progress(&self) -> f32 {
        self.spring.value()
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        self.spring.set_target(if self.active { 1.0 } else { 0.0 });
    }

    pub fn tick(&mut self, dt: Duration) {
        self.spring.step(dt);
    }

    /// Derived channels for the current trajectory value. Channels are not
    /// clamped; the transient extrapolates past the endpoints.
    pub fn visual(&self) -> BoxVisual {
        let s = self.spring.value();
        BoxVisual {
            scale: lerp(BOX_SCALE_REST, BOX_SCALE_ACTIVE, s),
            rotation_y: lerp(0.0, BOX_ROTATION_ACTIVE, s),
            lift: lerp(BOX_SCALE_REST, BOX_SCALE_ACTIVE, s),
            color: lerp_rgb(BOX_COLOR_REST, BOX_COLOR_ACTIVE, s),
        }
    }
}
