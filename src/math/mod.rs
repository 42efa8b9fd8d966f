//! Vector and matrix math for world/view/projection transforms.
//!
//! All matrix builders are pure: they take matrices in and return new ones,
//! because world and view matrices are composed from the same identity seed
//! within a single frame and must never observe each other's intermediate
//! state.

pub mod transform;
pub mod vector;

pub use transform::{
    Matrix4, IDENTITY_MATRIX, degrees_to_radians, orthogonal_projection_matrix,
    projection_matrix, rotation_matrix, view_matrix, world_matrix,
};
pub use vector::{Vector3, Vector4};
