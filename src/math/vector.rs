//! 3- and 4-component vectors with plain value semantics.

use crate::math::transform::Matrix4;

/// A mutable 3-component vector.
///
/// Copy semantics on purpose: positions and rotations are owned exclusively
/// by the object they belong to, and anything that reports one (for example
/// a mouse event) takes a snapshot copy, never a live reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length `sqrt(x² + y² + z²)`.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Reciprocal of the length. Non-finite for a zero vector.
    pub fn inverse_length(&self) -> f32 {
        1.0 / self.length()
    }

    /// Returns a new, normalized vector.
    ///
    /// Normalizing a zero-length vector yields non-finite components; callers
    /// must guard against that themselves.
    pub fn normalized(&self) -> Vector3 {
        let inverse_length = self.inverse_length();

        Vector3::new(
            self.x * inverse_length,
            self.y * inverse_length,
            self.z * inverse_length,
        )
    }
}

/// [`Vector3`] plus a `w` component, used for homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Multiplies this vector by a matrix, producing a new vector.
    ///
    /// The index pattern follows the flat layout described in
    /// [`crate::math::transform`]: component `i` of the result sums
    /// `matrix[i + 4 * k]` over the vector components `k`.
    pub fn multiply_matrix(&self, matrix: &Matrix4) -> Vector4 {
        Vector4::new(
            matrix[0] * self.x + matrix[4] * self.y + matrix[8] * self.z + matrix[12] * self.w,
            matrix[1] * self.x + matrix[5] * self.y + matrix[9] * self.z + matrix[13] * self.w,
            matrix[2] * self.x + matrix[6] * self.y + matrix[10] * self.z + matrix[14] * self.w,
            matrix[3] * self.x + matrix[7] * self.y + matrix[11] * self.z + matrix[15] * self.w,
        )
    }
}

impl From<Vector3> for Vector4 {
    fn from(v: Vector3) -> Self {
        Vector4::new(v.x, v.y, v.z, 1.0)
    }
}
