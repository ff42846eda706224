//! Platform-free scene description: camera, picking math, and the cube mesh.
//!
//! Both frontends consume these to build matrices and hit-test the box; no
//! windowing or GPU types appear here.

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Compute a world-space ray through a screen pixel.
    ///
    /// - `sx`, `sy`: pixel coordinates in the rendering surface's space
    /// - `width`, `height`: surface dimensions in the same space
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height);
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let dir = (far - self.eye).normalize();
        (self.eye, dir)
    }
}

/// The fixed scene camera looking at the origin.
pub fn scene_camera(aspect: f32) -> Camera {
    Camera {
        eye: camera_eye_vec3(),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// NDC-space translation that shifts the whole scene by a pixel offset.
/// Screen Y grows downward, clip Y upward.
pub fn panel_shift_matrix(offset_px: Vec2, width: f32, height: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(
        2.0 * offset_px.x / width,
        -2.0 * offset_px.y / height,
        0.0,
    ))
}

/// Unit cube as interleaved position + normal, two triangles per face.
pub fn cube_vertices() -> Vec<f32> {
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
    ];
    let mut verts = Vec::with_capacity(36 * 6);
    for (normal, corners) in faces {
        // CCW winding viewed from outside
        for idx in [0usize, 1, 2, 0, 2, 3] {
            verts.extend_from_slice(&corners[idx]);
            verts.extend_from_slice(&normal);
        }
    }
    verts
}
