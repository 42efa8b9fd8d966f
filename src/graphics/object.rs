//! Drawable objects and the GPU resources they hold.

use crate::graphics::api::{BufferHandle, GraphicsApi, GraphicsError, VertexArrayHandle};
use crate::graphics::shader::ShaderProgram;
use crate::math::Vector3;

/// Something a [`ShaderProgram`] can set up, draw and step each frame.
///
/// The servicing program is threaded into `init` and `render` so objects
/// attach buffers and uniforms through it instead of holding a reference
/// back to it.
pub trait GraphicsObject<A: GraphicsApi> {
    fn id(&self) -> u32;

    /// One-time GPU setup: upload vertex data and wire it into the object's
    /// vertex array.
    fn init(&mut self, shader_program: &ShaderProgram<A>) -> Result<(), GraphicsError>;

    /// Issues this object's draw calls. The program is already bound.
    fn render(&mut self, shader_program: &ShaderProgram<A>) -> Result<(), GraphicsError>;

    /// Per-frame state step, before rendering.
    fn update(&mut self);

    fn position(&self) -> Vector3;

    fn set_position(&mut self, x: f32, y: f32, z: f32);

    fn rotation(&self) -> Vector3;

    fn set_rotation(&mut self, x: f32, y: f32, z: f32);

    fn scale(&self) -> f32;

    fn set_scale(&mut self, scale: f32);
}

/// The vertex array and data buffers backing one drawable object.
///
/// The vertex array handle is live from construction onward, including
/// across [`DrawResources::clean`], so an object can always be initialized
/// again after a teardown.
#[derive(Debug)]
pub struct DrawResources {
    vao: VertexArrayHandle,
    buffers: Vec<BufferHandle>,
}

impl DrawResources {
    pub fn new<A: GraphicsApi>(shader_program: &ShaderProgram<A>) -> Result<Self, GraphicsError> {
        Ok(Self {
            vao: shader_program.create_vertex_array_object()?,
            buffers: Vec::new(),
        })
    }

    pub fn vao(&self) -> VertexArrayHandle {
        self.vao
    }

    /// Records a buffer as owned by this bundle, for deletion on teardown.
    pub fn track(&mut self, buffer: BufferHandle) {
        self.buffers.push(buffer);
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Tears the bundle down and leaves it ready for a fresh `init`.
    ///
    /// The context protocol is order-sensitive: attribute 0 is disabled and
    /// the array buffer unbound before any deletion, the vertex array is
    /// unbound before it is deleted, and a replacement vertex array is
    /// acquired last.
    pub fn clean<A: GraphicsApi>(
        &mut self,
        shader_program: &ShaderProgram<A>,
    ) -> Result<(), GraphicsError> {
        shader_program.disable_vertex_attribute(0);
        shader_program.unbind_array_buffer();
        shader_program.delete_buffers(&self.buffers);
        shader_program.unbind_vertex_array_object();
        shader_program.delete_vertex_array_object(self.vao);

        self.vao = shader_program.create_vertex_array_object()?;
        self.buffers.clear();
        Ok(())
    }
}
