//! A mesh-backed drawable with a position, rotation and uniform scale.

use crate::graphics::api::{GraphicsApi, GraphicsError};
use crate::graphics::mesh::Mesh;
use crate::graphics::object::{DrawResources, GraphicsObject};
use crate::graphics::shader::ShaderProgram;
use crate::math::{self, Vector3};

/// Draws a [`Mesh`] as indexed triangles, placed by its world transform.
pub struct GraphicsModel {
    id: u32,
    mesh: Mesh,
    resources: DrawResources,
    position: Vector3,
    rotation: Vector3,
    scale: f32,
}

impl GraphicsModel {
    /// Builds a model at the origin with no rotation and unit scale. The
    /// vertex array is acquired here; buffers follow in `init`.
    pub fn new<A: GraphicsApi>(
        id: u32,
        shader_program: &ShaderProgram<A>,
        mesh: Mesh,
    ) -> Result<Self, GraphicsError> {
        Ok(Self {
            id,
            mesh,
            resources: DrawResources::new(shader_program)?,
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: 1.0,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    // Transform accessors live here as well as on the trait, so calls do
    // not need a backend type pinned down.

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vector3::new(x, y, z);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn buffer_count(&self) -> usize {
        self.resources.buffer_count()
    }

    /// Releases the model's buffers and vertex array. The model stays
    /// usable: a later `init` rebuilds everything on a fresh vertex array.
    pub fn clean_buffers<A: GraphicsApi>(
        &mut self,
        shader_program: &ShaderProgram<A>,
    ) -> Result<(), GraphicsError> {
        self.resources.clean(shader_program)
    }
}

impl<A: GraphicsApi> GraphicsObject<A> for GraphicsModel {
    fn id(&self) -> u32 {
        self.id
    }

    fn init(&mut self, shader_program: &ShaderProgram<A>) -> Result<(), GraphicsError> {
        let bound = shader_program.bind_vertex_array_object(self.resources.vao());

        self.resources.track(shader_program.attach_array_buffer_f32(
            0,
            3,
            false,
            0,
            0,
            self.mesh.positions(),
        )?);
        self.resources.track(shader_program.attach_array_buffer_f32(
            1,
            2,
            false,
            0,
            0,
            self.mesh.texture_coordinates(),
        )?);
        self.resources.track(shader_program.attach_array_buffer_f32(
            2,
            3,
            false,
            0,
            0,
            self.mesh.normals(),
        )?);
        self.resources
            .track(shader_program.attach_element_buffer_u16(self.mesh.indices())?);

        shader_program.unbind_array_buffer();
        drop(bound);
        Ok(())
    }

    fn render(&mut self, shader_program: &ShaderProgram<A>) -> Result<(), GraphicsError> {
        let world_matrix = math::world_matrix(
            self.position,
            self.rotation,
            self.scale,
            self.scale,
            self.scale,
        );

        shader_program.attach_matrix4_uniform_data("worldMatrix", &world_matrix)?;

        shader_program.draw_triangle_elements_with_vao(
            self.resources.vao(),
            self.mesh.vertex_count() as i32,
            0,
        );
        Ok(())
    }

    fn update(&mut self) {}

    fn position(&self) -> Vector3 {
        GraphicsModel::position(self)
    }

    fn set_position(&mut self, x: f32, y: f32, z: f32) {
        GraphicsModel::set_position(self, x, y, z);
    }

    fn rotation(&self) -> Vector3 {
        GraphicsModel::rotation(self)
    }

    fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        GraphicsModel::set_rotation(self, x, y, z);
    }

    fn scale(&self) -> f32 {
        GraphicsModel::scale(self)
    }

    fn set_scale(&mut self, scale: f32) {
        GraphicsModel::set_scale(self, scale);
    }
}
