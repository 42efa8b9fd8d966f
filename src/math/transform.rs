//! World, view and projection matrix builders.
//!
//! Matrices are flat `[f32; 16]` arrays, never wrapped in a struct: the draw
//! consumer uploads them verbatim as mat4 uniforms, so the index layout here
//! is part of the contract. Rows of four live at indices `0..4`, `4..8`,
//! `8..12` and `12..16`; the translation sits in the last row.
//!
//! Every builder is a pure function that returns a new matrix.

use crate::math::vector::Vector3;

/// A 4×4 matrix as a flat, ordered sequence of 16 floats.
pub type Matrix4 = [f32; 16];

/// The identity matrix every composition starts from.
#[rustfmt::skip]
pub const IDENTITY_MATRIX: Matrix4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(angle: f32) -> f32 {
    angle * (std::f32::consts::PI / 180.0)
}

/// Builds the world matrix for an object transform.
///
/// Composition order: translation first, then rotation about X, Y and Z in
/// turn (each applied to the already-rotated matrix), scale last. Rotation
/// angles are in degrees.
///
/// The Z row is scaled by `scale_x`, not `scale_z`: callers pass a single
/// uniform scale for all three axes, and downstream consumers bake in this
/// exact matrix, so the asymmetry is kept as-is.
pub fn world_matrix(
    position: Vector3,
    rotation: Vector3,
    scale_x: f32,
    scale_y: f32,
    _scale_z: f32,
) -> Matrix4 {
    let translated = translation(&IDENTITY_MATRIX, position);
    let rotated_x = rotation_x(&translated, degrees_to_radians(rotation.x));
    let rotated_xy = rotation_y(&rotated_x, degrees_to_radians(rotation.y));
    let rotated_xyz = rotation_z(&rotated_xy, degrees_to_radians(rotation.z));
    scale(&rotated_xyz, scale_x, scale_y, scale_x)
}

/// Builds the camera-space view matrix.
///
/// Rotates about the X axis by `rotation.x`, then about the Y axis (in the
/// frame already rotated by X) by `rotation.y`, both via axis-angle rotation
/// about the unit axes, then translates by the negated position. Rotate
/// first, translate second: this is a camera transform, not a model one.
pub fn view_matrix(position: Vector3, rotation: Vector3) -> Matrix4 {
    let rotated_x = rotation_matrix(
        &IDENTITY_MATRIX,
        degrees_to_radians(rotation.x),
        Vector3::new(1.0, 0.0, 0.0),
    );
    let rotated_xy = rotation_matrix(
        &rotated_x,
        degrees_to_radians(rotation.y),
        Vector3::new(0.0, 1.0, 0.0),
    );
    translation(
        &rotated_xy,
        Vector3::new(-position.x, -position.y, -position.z),
    )
}

/// Builds a perspective projection matrix.
///
/// `field_of_view` is in radians. The layout is fixed; the projection
/// consumer relies on `-1` at slot 11 and the `2 * z_far * z_near * nf` term
/// at slot 14.
#[rustfmt::skip]
pub fn projection_matrix(aspect_ratio: f32, field_of_view: f32, z_near: f32, z_far: f32) -> Matrix4 {
    let f = 1.0 / (field_of_view / 2.0).tan();
    let nf = 1.0 / (z_near - z_far);

    [
        f / aspect_ratio, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (z_far + z_near) * nf, -1.0,
        0.0, 0.0, 2.0 * z_far * z_near * nf, 0.0,
    ]
}

/// Builds a 2D orthogonal projection matrix for UI-space drawing.
///
/// Z passes through unchanged apart from the `-1` at slot 10; there are no
/// near/far planes.
#[rustfmt::skip]
pub fn orthogonal_projection_matrix(left: f32, right: f32, bottom: f32, top: f32) -> Matrix4 {
    let left_minus_right = 1.0 / (left - right);
    let bottom_minus_top = 1.0 / (bottom - top);

    [
        -2.0 * left_minus_right, 0.0, 0.0, 0.0,
        0.0, -2.0 * bottom_minus_top, 0.0, 0.0,
        0.0, 0.0, -1.0, 0.0,
        (left + right) * left_minus_right, (top + bottom) * bottom_minus_top, 0.0, 1.0,
    ]
}

/// Applies a translation to `matrix`, returning a new matrix.
#[rustfmt::skip]
fn translation(matrix: &Matrix4, vector: Vector3) -> Matrix4 {
    [
        matrix[0], matrix[1], matrix[2], matrix[3],
        matrix[4], matrix[5], matrix[6], matrix[7],
        matrix[8], matrix[9], matrix[10], matrix[11],
        matrix[0] * vector.x + matrix[4] * vector.y + matrix[8] * vector.z + matrix[12],
        matrix[1] * vector.x + matrix[5] * vector.y + matrix[9] * vector.z + matrix[13],
        matrix[2] * vector.x + matrix[6] * vector.y + matrix[10] * vector.z + matrix[14],
        matrix[3] * vector.x + matrix[7] * vector.y + matrix[11] * vector.z + matrix[15],
    ]
}

/// Applies a rotation about the X axis to `matrix`. Angle in radians.
#[rustfmt::skip]
fn rotation_x(matrix: &Matrix4, angle: f32) -> Matrix4 {
    let sin = angle.sin();
    let cos = angle.cos();

    [
        matrix[0], matrix[1], matrix[2], matrix[3],
        matrix[4] * cos + matrix[8] * sin,
        matrix[5] * cos + matrix[9] * sin,
        matrix[6] * cos + matrix[10] * sin,
        matrix[7] * cos + matrix[11] * sin,
        matrix[8] * cos - matrix[4] * sin,
        matrix[9] * cos - matrix[5] * sin,
        matrix[10] * cos - matrix[6] * sin,
        matrix[11] * cos - matrix[7] * sin,
        matrix[12], matrix[13], matrix[14], matrix[15],
    ]
}

/// Applies a rotation about the Y axis to `matrix`. Angle in radians.
#[rustfmt::skip]
fn rotation_y(matrix: &Matrix4, angle: f32) -> Matrix4 {
    let sin = angle.sin();
    let cos = angle.cos();

    [
        matrix[0] * cos - matrix[8] * sin,
        matrix[1] * cos - matrix[9] * sin,
        matrix[2] * cos - matrix[10] * sin,
        matrix[3] * cos - matrix[11] * sin,
        matrix[4], matrix[5], matrix[6], matrix[7],
        matrix[0] * sin + matrix[8] * cos,
        matrix[1] * sin + matrix[9] * cos,
        matrix[2] * sin + matrix[10] * cos,
        matrix[3] * sin + matrix[11] * cos,
        matrix[12], matrix[13], matrix[14], matrix[15],
    ]
}

/// Applies a rotation about the Z axis to `matrix`. Angle in radians.
#[rustfmt::skip]
fn rotation_z(matrix: &Matrix4, angle: f32) -> Matrix4 {
    let sin = angle.sin();
    let cos = angle.cos();

    [
        matrix[0] * cos + matrix[4] * sin,
        matrix[1] * cos + matrix[5] * sin,
        matrix[2] * cos + matrix[6] * sin,
        matrix[3] * cos + matrix[7] * sin,
        matrix[4] * cos - matrix[0] * sin,
        matrix[5] * cos - matrix[1] * sin,
        matrix[6] * cos - matrix[2] * sin,
        matrix[7] * cos - matrix[3] * sin,
        matrix[8], matrix[9], matrix[10], matrix[11],
        matrix[12], matrix[13], matrix[14], matrix[15],
    ]
}

/// Scales the X/Y/Z rows of `matrix` by the given factors.
#[rustfmt::skip]
fn scale(matrix: &Matrix4, x: f32, y: f32, z: f32) -> Matrix4 {
    [
        matrix[0] * x, matrix[1] * x, matrix[2] * x, matrix[3] * x,
        matrix[4] * y, matrix[5] * y, matrix[6] * y, matrix[7] * y,
        matrix[8] * z, matrix[9] * z, matrix[10] * z, matrix[11] * z,
        matrix[12], matrix[13], matrix[14], matrix[15],
    ]
}

/// Applies an axis-angle rotation (Rodrigues formula) about `axis` to
/// `matrix`. Angle in radians.
///
/// The axis is normalized internally; passing a zero axis produces a
/// non-finite matrix and is the caller's responsibility to avoid.
pub fn rotation_matrix(matrix: &Matrix4, angle: f32, axis: Vector3) -> Matrix4 {
    let sin = angle.sin();
    let cos = angle.cos();
    let one_minus_cos = 1.0 - cos;

    let n = axis.normalized();

    let a = n.x * n.x * one_minus_cos + cos;
    let b = n.y * n.x * one_minus_cos + n.z * sin;
    let c = n.z * n.x * one_minus_cos - n.y * sin;
    let d = n.x * n.y * one_minus_cos - n.z * sin;
    let e = n.y * n.y * one_minus_cos + cos;
    let f = n.z * n.y * one_minus_cos + n.x * sin;
    let g = n.x * n.z * one_minus_cos + n.y * sin;
    let h = n.y * n.z * one_minus_cos - n.x * sin;
    let i = n.z * n.z * one_minus_cos + cos;

    [
        matrix[0] * a + matrix[4] * b + matrix[8] * c,
        matrix[1] * a + matrix[5] * b + matrix[9] * c,
        matrix[2] * a + matrix[6] * b + matrix[10] * c,
        matrix[3] * a + matrix[7] * b + matrix[11] * c,
        matrix[0] * d + matrix[4] * e + matrix[8] * f,
        matrix[1] * d + matrix[5] * e + matrix[9] * f,
        matrix[2] * d + matrix[6] * e + matrix[10] * f,
        matrix[3] * d + matrix[7] * e + matrix[11] * f,
        matrix[0] * g + matrix[4] * h + matrix[8] * i,
        matrix[1] * g + matrix[5] * h + matrix[9] * i,
        matrix[2] * g + matrix[6] * h + matrix[10] * i,
        matrix[3] * g + matrix[7] * h + matrix[11] * i,
        matrix[12],
        matrix[13],
        matrix[14],
        matrix[15],
    ]
}
