//! Polygon mesh data on the CPU side.

/// Vertex data for one drawable mesh.
///
/// Attribute arrays are flat: positions and normals three floats per vertex,
/// texture coordinates two. Indices are 16-bit and index into those arrays.
/// `vertex_count` is the number of indices a draw call consumes, stated by
/// the caller rather than derived, so a mesh can draw a prefix of its index
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    texture_coordinates: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u16>,
    vertex_count: usize,
}

impl Mesh {
    pub fn new(
        positions: Vec<f32>,
        texture_coordinates: Vec<f32>,
        normals: Vec<f32>,
        indices: Vec<u16>,
        vertex_count: usize,
    ) -> Self {
        Self {
            positions,
            texture_coordinates,
            normals,
            indices,
            vertex_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn texture_coordinates(&self) -> &[f32] {
        &self.texture_coordinates
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}
