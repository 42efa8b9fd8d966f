//! Shader program lifecycle and the draw-side helpers built on it.
//!
//! A [`ShaderProgram`] owns:
//! - the program and stage-shader handles it created on the context,
//! - the compile and link status bits,
//! - the graphics objects it services during a frame.
//!
//! Compile and link problems are soft failures: they are logged with the
//! backend diagnostic and remembered in [`ShaderProgram::is_linked`], but
//! they never abort the caller. Failing to *create* a resource on the
//! context does abort, as does a uniform name that will not resolve.

use std::mem;
use std::rc::Rc;

use crate::graphics::api::{
    BoundProgram, BoundVertexArray, BufferHandle, CompilationStatus, GraphicsApi, GraphicsError,
    ProgramHandle, ShaderHandle, ShaderStage, VertexArrayHandle,
};
use crate::graphics::object::GraphicsObject;
use crate::math::{Matrix4, Vector3, Vector4};

pub struct ShaderProgram<A: GraphicsApi> {
    id: u32,
    api: Rc<A>,
    program: ProgramHandle,
    vertex_shader: ShaderHandle,
    fragment_shader: ShaderHandle,
    vertex_compiled: bool,
    fragment_compiled: bool,
    linked: bool,
    graphics_objects: Vec<Box<dyn GraphicsObject<A>>>,
}

impl<A: GraphicsApi> ShaderProgram<A> {
    /// Creates the program and both stage shaders on the context. No source
    /// is compiled yet.
    pub fn new(api: Rc<A>, id: u32) -> Result<Self, GraphicsError> {
        let program = api.create_program()?;
        let vertex_shader = api.create_shader(ShaderStage::Vertex)?;
        let fragment_shader = api.create_shader(ShaderStage::Fragment)?;

        Ok(Self {
            id,
            api,
            program,
            vertex_shader,
            fragment_shader,
            vertex_compiled: false,
            fragment_compiled: false,
            linked: false,
            graphics_objects: Vec::new(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Compiles vertex stage source. A failed compile logs the diagnostic
    /// and leaves the program unlinkable.
    pub fn create_vertex_shader(&mut self, source: &str) {
        self.vertex_compiled = match self.api.compile_shader(self.vertex_shader, source) {
            CompilationStatus::Ok => true,
            CompilationStatus::Failed(diagnostic) => {
                log::error!("vertex shader compilation failed: {diagnostic}");
                false
            }
        };
    }

    /// Compiles fragment stage source, with the same soft-fail contract as
    /// [`Self::create_vertex_shader`].
    pub fn create_fragment_shader(&mut self, source: &str) {
        self.fragment_compiled = match self.api.compile_shader(self.fragment_shader, source) {
            CompilationStatus::Ok => true,
            CompilationStatus::Failed(diagnostic) => {
                log::error!("fragment shader compilation failed: {diagnostic}");
                false
            }
        };
    }

    /// Attaches both stage shaders and links. Link problems are logged, not
    /// returned.
    pub fn attach_shaders(&mut self) {
        self.api.attach_shader(self.program, self.vertex_shader);
        self.api.attach_shader(self.program, self.fragment_shader);

        self.linked = match self.api.link_program(self.program) {
            CompilationStatus::Ok => self.vertex_compiled && self.fragment_compiled,
            CompilationStatus::Failed(diagnostic) => {
                log::error!("shader program link failed: {diagnostic}");
                false
            }
        };
    }

    /// Whether both stages compiled and the program linked.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Replaces the serviced objects, handing back the previous set.
    pub fn set_graphics_objects(
        &mut self,
        graphics_objects: Vec<Box<dyn GraphicsObject<A>>>,
    ) -> Vec<Box<dyn GraphicsObject<A>>> {
        mem::replace(&mut self.graphics_objects, graphics_objects)
    }

    /// Runs every object's GPU setup. Objects are handed this program so
    /// they can attach their buffers through it.
    pub fn init_graphics_objects(&mut self) -> Result<(), GraphicsError> {
        let mut objects = mem::take(&mut self.graphics_objects);
        let result = objects.iter_mut().try_for_each(|object| object.init(self));
        self.graphics_objects = objects;
        result
    }

    /// Runs every object's per-frame update.
    pub fn update_graphics_objects(&mut self) {
        for object in &mut self.graphics_objects {
            object.update();
        }
    }

    /// Draws every serviced object under this program.
    ///
    /// The program stays bound for the whole pass; the shared projection and
    /// view matrices are attached once, each object attaches its own world
    /// matrix. The orthogonal projection is accepted for screen-space
    /// drawing and currently unused.
    pub fn render(
        &mut self,
        _orthogonal_projection_matrix: &Matrix4,
        projection_matrix: &Matrix4,
        view_matrix: &Matrix4,
    ) -> Result<(), GraphicsError> {
        // The guard borrows its own handle on the context so the object
        // list can be taken out below.
        let api = self.api.clone();
        let bound = BoundProgram::new(&*api, self.program);

        self.attach_matrix4_uniform_data("projectionMatrix", projection_matrix)?;
        self.attach_matrix4_uniform_data("viewMatrix", view_matrix)?;

        let mut objects = mem::take(&mut self.graphics_objects);
        let result = objects
            .iter_mut()
            .try_for_each(|object| object.render(self));
        self.graphics_objects = objects;

        drop(bound);
        result
    }

    // Resource helpers for graphics objects. These mirror the context's
    // bind/upload protocol and leave the array buffer bound after an attach;
    // callers unbind once all attributes are in place.

    pub fn create_vertex_array_object(&self) -> Result<VertexArrayHandle, GraphicsError> {
        self.api.create_vertex_array()
    }

    pub fn delete_vertex_array_object(&self, vao: VertexArrayHandle) {
        self.api.delete_vertex_array(vao);
    }

    /// Binds `vao` until the returned guard drops.
    pub fn bind_vertex_array_object(&self, vao: VertexArrayHandle) -> BoundVertexArray<'_, A> {
        BoundVertexArray::new(&*self.api, vao)
    }

    /// Clears the ambient vertex-array binding, whatever it is.
    pub fn unbind_vertex_array_object(&self) {
        self.api.unbind_vertex_array();
    }

    pub fn unbind_array_buffer(&self) {
        self.api.unbind_array_buffer();
    }

    pub fn disable_vertex_attribute(&self, index: u32) {
        self.api.disable_vertex_attribute(index);
    }

    pub fn delete_buffers(&self, buffers: &[BufferHandle]) {
        for &buffer in buffers {
            self.api.delete_buffer(buffer);
        }
    }

    /// Uploads static float data into a fresh array buffer and wires it to
    /// vertex attribute `index`.
    pub fn attach_array_buffer_f32(
        &self,
        index: u32,
        component_count: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
        data: &[f32],
    ) -> Result<BufferHandle, GraphicsError> {
        let buffer = self.api.create_buffer()?;

        self.api.bind_array_buffer(buffer);
        self.api.array_buffer_static_data(bytemuck::cast_slice(data));
        self.api.enable_vertex_attribute(index);
        self.api
            .vertex_attribute_pointer_f32(index, component_count, normalized, stride, offset);

        Ok(buffer)
    }

    /// Uploads static 16-bit indices into a fresh element array buffer.
    pub fn attach_element_buffer_u16(&self, data: &[u16]) -> Result<BufferHandle, GraphicsError> {
        let buffer = self.api.create_buffer()?;

        self.api.bind_element_array_buffer(buffer);
        self.api
            .element_array_buffer_static_data(bytemuck::cast_slice(data));

        Ok(buffer)
    }

    /// Draws `count` indexed triangle vertices out of `vao`.
    pub fn draw_triangle_elements_with_vao(&self, vao: VertexArrayHandle, count: i32, offset: i32) {
        let _bound = self.bind_vertex_array_object(vao);
        self.api.draw_indexed_triangles(count, offset);
    }

    /// Draws `count` indexed line vertices out of `vao`.
    pub fn draw_line_elements_with_vao(&self, vao: VertexArrayHandle, count: i32, offset: i32) {
        let _bound = self.bind_vertex_array_object(vao);
        self.api.draw_indexed_lines(count, offset);
    }

    // Uniform attachment. Locations are resolved on every call; a name the
    // linked program does not export is a hard error.

    pub fn attach_f32_uniform_data(&self, name: &str, data: f32) -> Result<(), GraphicsError> {
        let location = self.api.uniform_location(self.program, name)?;
        self.api.set_uniform_f32(location, data);
        Ok(())
    }

    pub fn attach_i32_uniform_data(&self, name: &str, data: i32) -> Result<(), GraphicsError> {
        let location = self.api.uniform_location(self.program, name)?;
        self.api.set_uniform_i32(location, data);
        Ok(())
    }

    pub fn attach_vector3_uniform_data(
        &self,
        name: &str,
        data: Vector3,
    ) -> Result<(), GraphicsError> {
        let location = self.api.uniform_location(self.program, name)?;
        self.api.set_uniform_vec3(location, data.x, data.y, data.z);
        Ok(())
    }

    pub fn attach_vector4_uniform_data(
        &self,
        name: &str,
        data: Vector4,
    ) -> Result<(), GraphicsError> {
        let location = self.api.uniform_location(self.program, name)?;
        self.api
            .set_uniform_vec4(location, data.x, data.y, data.z, data.w);
        Ok(())
    }

    pub fn attach_matrix4_uniform_data(
        &self,
        name: &str,
        data: &Matrix4,
    ) -> Result<(), GraphicsError> {
        let location = self.api.uniform_location(self.program, name)?;
        self.api.set_uniform_matrix4(location, false, data);
        Ok(())
    }
}
