use glam::Vec3;

// Shared scene and interaction tuning constants used by both frontends.

// Camera
pub const CAMERA_EYE: [f32; 3] = [-10.0, 10.0, 10.0];
pub const CAMERA_FOVY_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Animated box endpoints (rest -> active)
pub const BOX_SCALE_REST: f32 = 1.0;
pub const BOX_SCALE_ACTIVE: f32 = 5.0;
pub const BOX_ROTATION_ACTIVE: f32 = std::f32::consts::PI;
pub const BOX_COLOR_REST: [f32; 3] = [0.384, 0.275, 0.918]; // #6246ea
pub const BOX_COLOR_ACTIVE: [f32; 3] = [0.894, 0.345, 0.345]; // #e45858

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.87; // bounding sphere of the unit cube
pub const TAP_SLOP_PX: f32 = 4.0; // max pointer travel for a press to count as a tap

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
