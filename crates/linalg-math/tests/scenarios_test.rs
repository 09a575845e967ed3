//! Concrete end-to-end scenarios: camera setup, projection and optics.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linalg_math::{
    dot, reflect, refract, to_vec3, to_vec4, Error, Mat3d, Mat4d, Mat4f, Vec3, Vec3d, Vec4,
};

#[test]
fn test_dot_and_cross_of_basis() {
    let x = Vec3d::new(1.0, 0.0, 0.0);
    let y = Vec3d::new(0.0, 1.0, 0.0);
    assert_eq!(dot(x, y), 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_refract_identity_at_unit_eta() {
    let i = Vec3d::new(0.0, 0.0, -1.0);
    let n = Vec3d::new(0.0, 0.0, 1.0);
    assert_eq!(refract(i, n, 1.0), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_total_internal_reflection_falls_back_to_reflect() {
    let angle = 60f64.to_radians();
    let i = Vec3d::new(0.0, angle.sin(), -angle.cos()).normalized();
    let n = Vec3d::new(0.0, 0.0, 1.0);
    assert!(refract(i, n, 1.5).is_approx(&reflect(i, n), 1e-9));
}

#[test]
fn test_perspective_focal_term() {
    let persp = Mat4d::perspective(45f64.to_radians(), 1.0, 0.1, 100.0);
    assert_abs_diff_eq!(persp.at(0, 0), 1.0 / 22.5f64.to_radians().tan(), epsilon = 1e-6);
}

#[test]
fn test_mat3_known_inverse() {
    let m = Mat3d::from_nested(&[[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 1.0]]).unwrap();
    let expected = Mat3d::from_rows([
        [1.0 / 3.0, 1.0, -5.0 / 3.0],
        [-1.0 / 3.0, 0.0, 2.0 / 3.0],
        [1.0, -2.0, 1.0],
    ]);
    assert!(m.inverse().is_approx(&expected, 1e-6));
}

#[test]
fn test_nested_construction_policies() {
    // Mat3 rejects a bad shape, Mat4 fills in what it is given.
    let err = Mat3d::from_nested(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
    assert!(err.is_shape_error());
    assert!(matches!(err, Error::InvalidShape { .. }));

    let m4 = Mat4d::from_nested(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
    assert_eq!(m4.row(0), Vec4::new(1.0, 2.0, 3.0, 0.0));
    assert_eq!(m4.row(1), Vec4::new(4.0, 5.0, 0.0, 0.0));
    assert_eq!(m4.row(2), Vec4::new(0.0, 0.0, 1.0, 0.0));
}

#[test]
fn test_camera_pipeline() {
    let eye = Vec3d::new(0.0, 0.0, 10.0);
    let view = Mat4d::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
    let proj = Mat4d::perspective(90f64.to_radians(), 1.0, 1.0, 100.0);
    let mvp = proj * view;

    // The look-at target lands in the middle of the screen.
    let clip = mvp * to_vec4(Vec3d::zero());
    let ndc = to_vec3(clip) / clip.w;
    assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-12);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);

    // Points on the near and far planes map to the ends of the depth range.
    let near = mvp * to_vec4(Vec3d::new(0.0, 0.0, 9.0));
    assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-12);
    let far = mvp * to_vec4(Vec3d::new(0.0, 0.0, -90.0));
    assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-12);

    // With a 90 degree field of view, x == depth sits on the right edge.
    let edge = mvp * to_vec4(Vec3d::new(5.0, 0.0, 5.0));
    assert_relative_eq!(edge.x / edge.w, 1.0, epsilon = 1e-12);
}

#[test]
fn test_orthographic_maps_box_to_cube() {
    let ortho = Mat4d::orthographic(-2.0, 6.0, -1.0, 3.0, 0.5, 10.5);
    let lo = ortho * Vec4::new(-2.0, -1.0, -0.5, 1.0);
    let hi = ortho * Vec4::new(6.0, 3.0, -10.5, 1.0);
    assert!(lo.is_approx(&Vec4::new(-1.0, -1.0, -1.0, 1.0), 1e-12));
    assert!(hi.is_approx(&Vec4::new(1.0, 1.0, 1.0, 1.0), 1e-12));
}

#[test]
fn test_view_inverse_recovers_eye() {
    let eye = Vec3d::new(4.0, -1.0, 2.5);
    let view = Mat4d::look_at(eye, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    let camera_to_world = view.inverse();
    let origin = camera_to_world * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(to_vec3(origin).is_approx(&eye, 1e-9));
}

#[test]
fn test_look_at_straight_down_needs_auto_up() {
    let eye = Vec3d::new(0.0, 10.0, 0.0);
    // Explicit +Y up is parallel to the view direction and degenerates.
    let degenerate = Mat4d::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(degenerate.row(0), Vec4::new(0.0, 0.0, 0.0, 0.0));

    let view = Mat4d::look_at_auto(eye, Vec3::zero());
    assert!(view.is_finite());
    let r = view.top_left_3x3();
    assert!((r * r.transposed()).is_approx(&Mat3d::identity(), 1e-12));
}

#[test]
fn test_single_precision_pipeline() {
    let view = Mat4f::look_at_auto(Vec3::new(1.0, 1.0, 1.0), Vec3::zero());
    let proj = Mat4f::perspective(1.0, 4.0 / 3.0, 0.1, 10.0);
    let clip = proj * view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
}
