//! The GPU capability interface the engine core draws through.
//!
//! The core never talks to a concrete graphics context; everything it needs
//! from the GPU (resource creation, the bind/upload/unbind protocol,
//! uniform stores and draw calls) goes through [`GraphicsApi`]. The
//! underlying context is assumed to keep ambient bound-object state across
//! calls, so bind/unbind pairs are a strict protocol; the scoped guards at
//! the bottom of this module keep that protocol honest across early returns.
//!
//! All calls must come from the frame tick's thread; the engine is strictly
//! single-threaded.

use thiserror::Error;

/// Errors surfaced by a [`GraphicsApi`] implementation or by the engine's
/// use of one.
///
/// Resource creation and uniform resolution are fatal-local: they abort the
/// current setup or draw path. Shader compile/link problems are deliberately
/// *not* errors; they are reported through the returned
/// [`CompilationStatus`] and a diagnostic log, and execution continues with
/// an unusable program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphicsError {
    /// The context could not create a shader, program, buffer or vertex
    /// array. Indicates an unrecoverable environment incapability.
    #[error("failed to create {0}")]
    ResourceCreation(&'static str),

    /// A uniform name did not resolve in the linked program.
    #[error("no uniform named [ {0} ] in the linked program")]
    UniformNotFound(String),

    /// Any other backend-reported failure.
    #[error("graphics backend error: {0}")]
    Backend(String),
}

/// Outcome of a shader compile or program link, with the backend's
/// diagnostic log on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilationStatus {
    Ok,
    Failed(String),
}

impl CompilationStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CompilationStatus::Ok)
    }
}

/// Which pipeline stage a shader handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);
    };
}

handle!(
    /// An opaque shader object handle.
    ShaderHandle
);
handle!(
    /// An opaque linked-program handle.
    ProgramHandle
);
handle!(
    /// An opaque data-buffer handle.
    BufferHandle
);
handle!(
    /// An opaque vertex-array handle.
    VertexArrayHandle
);
handle!(
    /// A resolved uniform location within a program.
    UniformLocation
);

/// The primitive GPU operations the engine core composes.
///
/// Buffer uploads take byte slices; call sites cast their typed data with
/// `bytemuck::cast_slice`. Methods take `&self`: the context's state is
/// ambient by nature and implementations use interior mutability where they
/// track anything.
pub trait GraphicsApi {
    // Shaders and programs.
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderHandle, GraphicsError>;
    /// Uploads source and compiles. Soft-fail: the status carries the
    /// diagnostic, the call itself never errors.
    fn compile_shader(&self, shader: ShaderHandle, source: &str) -> CompilationStatus;
    fn create_program(&self) -> Result<ProgramHandle, GraphicsError>;
    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle);
    /// Links the program. Soft-fail like [`Self::compile_shader`].
    fn link_program(&self, program: ProgramHandle) -> CompilationStatus;
    fn bind_program(&self, program: ProgramHandle);
    fn unbind_program(&self);

    // Vertex arrays.
    fn create_vertex_array(&self) -> Result<VertexArrayHandle, GraphicsError>;
    fn delete_vertex_array(&self, vao: VertexArrayHandle);
    fn bind_vertex_array(&self, vao: VertexArrayHandle);
    fn unbind_vertex_array(&self);

    // Buffers.
    fn create_buffer(&self) -> Result<BufferHandle, GraphicsError>;
    fn delete_buffer(&self, buffer: BufferHandle);
    fn bind_array_buffer(&self, buffer: BufferHandle);
    fn unbind_array_buffer(&self);
    fn bind_element_array_buffer(&self, buffer: BufferHandle);
    /// Uploads static f32 data to the bound array buffer.
    fn array_buffer_static_data(&self, data: &[u8]);
    /// Uploads static u16 data to the bound element array buffer.
    fn element_array_buffer_static_data(&self, data: &[u8]);

    // Vertex attributes.
    fn enable_vertex_attribute(&self, index: u32);
    fn disable_vertex_attribute(&self, index: u32);
    fn vertex_attribute_pointer_f32(
        &self,
        index: u32,
        component_count: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    // Uniforms. Location resolution is the one hard-failing lookup.
    fn uniform_location(
        &self,
        program: ProgramHandle,
        name: &str,
    ) -> Result<UniformLocation, GraphicsError>;
    fn set_uniform_f32(&self, location: UniformLocation, value: f32);
    fn set_uniform_i32(&self, location: UniformLocation, value: i32);
    fn set_uniform_vec3(&self, location: UniformLocation, x: f32, y: f32, z: f32);
    fn set_uniform_vec4(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn set_uniform_matrix4(&self, location: UniformLocation, transpose: bool, data: &[f32; 16]);

    // Draws.
    fn draw_indexed_triangles(&self, count: i32, offset: i32);
    fn draw_indexed_lines(&self, count: i32, offset: i32);

    // Framebuffer state.
    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn set_clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear_color_buffer(&self);
    fn clear_depth_buffer(&self);
    fn enable_depth_test(&self);
    fn enable_blend(&self);
}

/// Scoped vertex-array binding: binds on construction, unbinds when dropped,
/// so no exit path can leak the ambient binding.
pub struct BoundVertexArray<'a, A: GraphicsApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: GraphicsApi + ?Sized> BoundVertexArray<'a, A> {
    pub fn new(api: &'a A, vao: VertexArrayHandle) -> Self {
        api.bind_vertex_array(vao);
        Self { api }
    }
}

impl<A: GraphicsApi + ?Sized> Drop for BoundVertexArray<'_, A> {
    fn drop(&mut self) {
        self.api.unbind_vertex_array();
    }
}

/// Scoped program binding, mirroring [`BoundVertexArray`].
pub struct BoundProgram<'a, A: GraphicsApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: GraphicsApi + ?Sized> BoundProgram<'a, A> {
    pub fn new(api: &'a A, program: ProgramHandle) -> Self {
        api.bind_program(program);
        Self { api }
    }
}

impl<A: GraphicsApi + ?Sized> Drop for BoundProgram<'_, A> {
    fn drop(&mut self) {
        self.api.unbind_program();
    }
}
