// Host-side tests for camera, picking, and mesh math.

use app_core::{
    cube_vertices, panel_shift_matrix, ray_sphere, scene_camera, PICK_SPHERE_RADIUS,
};
use glam::{Vec2, Vec3, Vec4};

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());
    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 10.0);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn camera_ray_through_screen_center_points_at_target() {
    let cam = scene_camera(1.5);
    let (ro, rd) = cam.screen_to_world_ray(450.0, 300.0, 900.0, 600.0);
    assert_eq!(ro, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(
        (rd - expected).length() < 1e-3,
        "center ray should aim at the look-at target, got {rd:?}"
    );
}

#[test]
fn picking_roundtrip_hits_the_box_where_it_projects() {
    let (width, height) = (900.0f32, 600.0f32);
    let cam = scene_camera(width / height);

    // Project the resting box center to screen, then cast back through it
    let center = Vec3::new(0.0, 1.0, 0.0);
    let clip = cam.view_proj() * Vec4::from((center, 1.0));
    let ndc = clip.truncate() / clip.w;
    let sx = (ndc.x + 1.0) * 0.5 * width;
    let sy = (1.0 - ndc.y) * 0.5 * height;

    let (ro, rd) = cam.screen_to_world_ray(sx, sy, width, height);
    let hit = ray_sphere(ro, rd, center, PICK_SPHERE_RADIUS);
    assert!(hit.is_some(), "ray through the projection must hit the box");
    assert!(hit.unwrap() > 0.0);
}

#[test]
fn picking_misses_far_from_the_box() {
    let (width, height) = (900.0f32, 600.0f32);
    let cam = scene_camera(width / height);
    let (ro, rd) = cam.screen_to_world_ray(5.0, 5.0, width, height);
    assert!(ray_sphere(ro, rd, Vec3::new(0.0, 1.0, 0.0), PICK_SPHERE_RADIUS).is_none());
}

#[test]
fn panel_shift_maps_pixels_to_clip_space() {
    let m = panel_shift_matrix(Vec2::new(45.0, -30.0), 900.0, 600.0);
    let p = m * Vec4::new(0.0, 0.0, 0.5, 1.0);
    // 45 px right over a 900 px surface is +0.1 in clip X
    assert!((p.x - 0.1).abs() < 1e-6);
    // 30 px up (negative screen Y) is +0.1 in clip Y
    assert!((p.y - 0.1).abs() < 1e-6);
    assert_eq!(p.z, 0.5);
}

#[test]
fn panel_shift_with_zero_offset_is_identity() {
    let m = panel_shift_matrix(Vec2::ZERO, 900.0, 600.0);
    let p = m * Vec4::new(0.3, -0.7, 0.5, 1.0);
    assert_eq!(p, Vec4::new(0.3, -0.7, 0.5, 1.0));
}

#[test]
fn cube_mesh_is_36_vertices_with_outward_normals() {
    let verts = cube_vertices();
    assert_eq!(verts.len(), 36 * 6);

    for v in verts.chunks_exact(6) {
        let pos = Vec3::new(v[0], v[1], v[2]);
        let normal = Vec3::new(v[3], v[4], v[5]);
        assert!((normal.length() - 1.0).abs() < 1e-6);
        // For a unit cube centered at the origin, each vertex sits on the
        // face its normal points out of
        assert!((pos.dot(normal) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn cube_triangles_wind_counter_clockwise() {
    let verts = cube_vertices();
    for tri in verts.chunks_exact(18) {
        let a = Vec3::new(tri[0], tri[1], tri[2]);
        let b = Vec3::new(tri[6], tri[7], tri[8]);
        let c = Vec3::new(tri[12], tri[13], tri[14]);
        let face_normal = Vec3::new(tri[3], tri[4], tri[5]);
        let winding = (b - a).cross(c - b);
        assert!(
            winding.dot(face_normal) > 0.0,
            "triangle winds against its stored normal"
        );
    }
}
