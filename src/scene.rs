//! Scene orchestration: one camera plus the shader programs that draw it.

use crate::camera::Camera;
use crate::graphics::{GraphicsApi, GraphicsError, ShaderProgram};
use crate::math;

const CAMERA_FIELD_OF_VIEW: f32 = 60.0;
const CAMERA_NEAR_CLIPPING_PLANE: f32 = 0.01;
const CAMERA_FAR_CLIPPING_PLANE: f32 = 1000.0;

pub struct Scene<A: GraphicsApi> {
    camera: Camera,
    shader_programs: Vec<ShaderProgram<A>>,
}

impl<A: GraphicsApi> Scene<A> {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(
                CAMERA_FIELD_OF_VIEW,
                CAMERA_NEAR_CLIPPING_PLANE,
                CAMERA_FAR_CLIPPING_PLANE,
            ),
            shader_programs: Vec::new(),
        }
    }

    /// Draws the scene into a viewport of the given pixel size.
    ///
    /// The camera applies its pending input first, then the shared matrices
    /// are computed once and handed to every program in insertion order.
    pub fn render(&mut self, width: f32, height: f32) -> Result<(), GraphicsError> {
        self.camera.render();

        let orthogonal_projection_matrix =
            math::orthogonal_projection_matrix(0.0, width, height, 0.0);
        let projection_matrix = self.camera.projection_matrix(width / height);
        let view_matrix = self.camera.view_matrix();

        for shader_program in &mut self.shader_programs {
            shader_program.render(
                &orthogonal_projection_matrix,
                &projection_matrix,
                &view_matrix,
            )?;
        }
        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Replaces the scene's programs, handing back the previous set so the
    /// caller can release their resources.
    pub fn set_shader_programs(
        &mut self,
        shader_programs: Vec<ShaderProgram<A>>,
    ) -> Vec<ShaderProgram<A>> {
        std::mem::replace(&mut self.shader_programs, shader_programs)
    }

    pub fn find_shader_program(&self, id: u32) -> Option<&ShaderProgram<A>> {
        self.shader_programs
            .iter()
            .find(|shader_program| shader_program.id() == id)
    }

    pub fn find_shader_program_mut(&mut self, id: u32) -> Option<&mut ShaderProgram<A>> {
        self.shader_programs
            .iter_mut()
            .find(|shader_program| shader_program.id() == id)
    }
}

impl<A: GraphicsApi> Default for Scene<A> {
    fn default() -> Self {
        Self::new()
    }
}
