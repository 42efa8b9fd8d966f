#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use prism_ngin::controls::{Keyboard, Mouse};
use prism_ngin::element::{GraphicsElement, Surface};
use prism_ngin::flow::GraphicsLogic;
use prism_ngin::graphics::{
    BufferHandle, CompilationStatus, GraphicsApi, GraphicsError, GraphicsObject, Mesh,
    ProgramHandle, ShaderHandle, ShaderProgram, ShaderStage, UniformLocation, VertexArrayHandle,
};
use prism_ngin::math::Vector3;

/// A context double that hands out sequential handles, records every call
/// in order and lets tests inject the failures the engine must survive.
pub struct RecordingApi {
    calls: RefCell<Vec<String>>,
    next_handle: Cell<u32>,
    uniform_locations: RefCell<HashMap<String, u32>>,
    uniform_names: RefCell<HashMap<u32, String>>,
    matrices: RefCell<HashMap<String, [f32; 16]>>,
    pub fail_compile: Cell<bool>,
    pub fail_link: Cell<bool>,
    pub fail_buffer_creation: Cell<bool>,
    pub fail_vertex_array_creation: Cell<bool>,
    pub missing_uniforms: RefCell<HashSet<String>>,
}

impl RecordingApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            uniform_locations: RefCell::new(HashMap::new()),
            uniform_names: RefCell::new(HashMap::new()),
            matrices: RefCell::new(HashMap::new()),
            fail_compile: Cell::new(false),
            fail_link: Cell::new(false),
            fail_buffer_creation: Cell::new(false),
            fail_vertex_array_creation: Cell::new(false),
            missing_uniforms: RefCell::new(HashSet::new()),
        })
    }

    fn next(&self) -> u32 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        handle
    }

    fn record(&self, entry: String) {
        self.calls.borrow_mut().push(entry);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Returns the recorded calls and starts a fresh log.
    pub fn take_calls(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Position of the first call equal to `expected`, panicking with the
    /// full log when it never happened.
    pub fn position_of(&self, expected: &str) -> usize {
        let calls = self.calls.borrow();
        calls
            .iter()
            .position(|call| call == expected)
            .unwrap_or_else(|| panic!("no call [ {expected} ] in {calls:?}"))
    }

    /// The last matrix attached to the uniform `name`.
    pub fn matrix(&self, name: &str) -> Option<[f32; 16]> {
        self.matrices.borrow().get(name).copied()
    }

    fn uniform_name(&self, location: UniformLocation) -> String {
        self.uniform_names
            .borrow()
            .get(&location.0)
            .cloned()
            .unwrap_or_else(|| format!("location-{}", location.0))
    }
}

impl GraphicsApi for RecordingApi {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderHandle, GraphicsError> {
        let handle = self.next();
        self.record(format!("create_shader({stage:?}) -> {handle}"));
        Ok(ShaderHandle(handle))
    }

    fn compile_shader(&self, shader: ShaderHandle, _source: &str) -> CompilationStatus {
        self.record(format!("compile_shader({})", shader.0));
        if self.fail_compile.get() {
            CompilationStatus::Failed("injected compile failure".to_owned())
        } else {
            CompilationStatus::Ok
        }
    }

    fn create_program(&self) -> Result<ProgramHandle, GraphicsError> {
        let handle = self.next();
        self.record(format!("create_program() -> {handle}"));
        Ok(ProgramHandle(handle))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(format!("attach_shader({}, {})", program.0, shader.0));
    }

    fn link_program(&self, program: ProgramHandle) -> CompilationStatus {
        self.record(format!("link_program({})", program.0));
        if self.fail_link.get() {
            CompilationStatus::Failed("injected link failure".to_owned())
        } else {
            CompilationStatus::Ok
        }
    }

    fn bind_program(&self, program: ProgramHandle) {
        self.record(format!("bind_program({})", program.0));
    }

    fn unbind_program(&self) {
        self.record("unbind_program()".to_owned());
    }

    fn create_vertex_array(&self) -> Result<VertexArrayHandle, GraphicsError> {
        if self.fail_vertex_array_creation.get() {
            return Err(GraphicsError::ResourceCreation("vertex array"));
        }
        let handle = self.next();
        self.record(format!("create_vertex_array() -> {handle}"));
        Ok(VertexArrayHandle(handle))
    }

    fn delete_vertex_array(&self, vao: VertexArrayHandle) {
        self.record(format!("delete_vertex_array({})", vao.0));
    }

    fn bind_vertex_array(&self, vao: VertexArrayHandle) {
        self.record(format!("bind_vertex_array({})", vao.0));
    }

    fn unbind_vertex_array(&self) {
        self.record("unbind_vertex_array()".to_owned());
    }

    fn create_buffer(&self) -> Result<BufferHandle, GraphicsError> {
        if self.fail_buffer_creation.get() {
            return Err(GraphicsError::ResourceCreation("buffer"));
        }
        let handle = self.next();
        self.record(format!("create_buffer() -> {handle}"));
        Ok(BufferHandle(handle))
    }

    fn delete_buffer(&self, buffer: BufferHandle) {
        self.record(format!("delete_buffer({})", buffer.0));
    }

    fn bind_array_buffer(&self, buffer: BufferHandle) {
        self.record(format!("bind_array_buffer({})", buffer.0));
    }

    fn unbind_array_buffer(&self) {
        self.record("unbind_array_buffer()".to_owned());
    }

    fn bind_element_array_buffer(&self, buffer: BufferHandle) {
        self.record(format!("bind_element_array_buffer({})", buffer.0));
    }

    fn array_buffer_static_data(&self, data: &[u8]) {
        self.record(format!("array_buffer_static_data({} bytes)", data.len()));
    }

    fn element_array_buffer_static_data(&self, data: &[u8]) {
        self.record(format!(
            "element_array_buffer_static_data({} bytes)",
            data.len()
        ));
    }

    fn enable_vertex_attribute(&self, index: u32) {
        self.record(format!("enable_vertex_attribute({index})"));
    }

    fn disable_vertex_attribute(&self, index: u32) {
        self.record(format!("disable_vertex_attribute({index})"));
    }

    fn vertex_attribute_pointer_f32(
        &self,
        index: u32,
        component_count: i32,
        _normalized: bool,
        _stride: i32,
        _offset: i32,
    ) {
        self.record(format!(
            "vertex_attribute_pointer_f32({index}, {component_count})"
        ));
    }

    fn uniform_location(
        &self,
        _program: ProgramHandle,
        name: &str,
    ) -> Result<UniformLocation, GraphicsError> {
        self.record(format!("uniform_location({name})"));
        if self.missing_uniforms.borrow().contains(name) {
            return Err(GraphicsError::UniformNotFound(name.to_owned()));
        }

        let mut locations = self.uniform_locations.borrow_mut();
        let next = locations.len() as u32 + 1_000;
        let location = *locations.entry(name.to_owned()).or_insert(next);
        self.uniform_names
            .borrow_mut()
            .insert(location, name.to_owned());
        Ok(UniformLocation(location))
    }

    fn set_uniform_f32(&self, location: UniformLocation, value: f32) {
        self.record(format!(
            "set_uniform_f32({}, {value})",
            self.uniform_name(location)
        ));
    }

    fn set_uniform_i32(&self, location: UniformLocation, value: i32) {
        self.record(format!(
            "set_uniform_i32({}, {value})",
            self.uniform_name(location)
        ));
    }

    fn set_uniform_vec3(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        self.record(format!(
            "set_uniform_vec3({}, {x}, {y}, {z})",
            self.uniform_name(location)
        ));
    }

    fn set_uniform_vec4(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.record(format!(
            "set_uniform_vec4({}, {x}, {y}, {z}, {w})",
            self.uniform_name(location)
        ));
    }

    fn set_uniform_matrix4(&self, location: UniformLocation, _transpose: bool, data: &[f32; 16]) {
        let name = self.uniform_name(location);
        self.matrices.borrow_mut().insert(name.clone(), *data);
        self.record(format!("set_uniform_matrix4({name})"));
    }

    fn draw_indexed_triangles(&self, count: i32, offset: i32) {
        self.record(format!("draw_indexed_triangles({count}, {offset})"));
    }

    fn draw_indexed_lines(&self, count: i32, offset: i32) {
        self.record(format!("draw_indexed_lines({count}, {offset})"));
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("set_viewport({x}, {y}, {width}, {height})"));
    }

    fn set_clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(format!("set_clear_color({red}, {green}, {blue}, {alpha})"));
    }

    fn clear_color_buffer(&self) {
        self.record("clear_color_buffer()".to_owned());
    }

    fn clear_depth_buffer(&self) {
        self.record("clear_depth_buffer()".to_owned());
    }

    fn enable_depth_test(&self) {
        self.record("enable_depth_test()".to_owned());
    }

    fn enable_blend(&self) {
        self.record("enable_blend()".to_owned());
    }
}

/// A surface with a fixed size and a shared close flag.
pub struct TestSurface {
    width: u32,
    height: u32,
    close: Rc<Cell<bool>>,
}

impl TestSurface {
    pub fn new(width: u32, height: u32) -> (Self, Rc<Cell<bool>>) {
        let close = Rc::new(Cell::new(false));
        (
            Self {
                width,
                height,
                close: close.clone(),
            },
            close,
        )
    }
}

impl Surface for TestSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn should_close(&self) -> bool {
        self.close.get()
    }
}

/// Logic double that records every hook invocation in order.
pub struct RecordingLogic {
    events: Rc<RefCell<Vec<String>>>,
    pub fail_render: bool,
}

impl RecordingLogic {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                events: events.clone(),
                fail_render: false,
            },
            events,
        )
    }
}

impl GraphicsLogic<RecordingApi> for RecordingLogic {
    fn init(&mut self, _element: &mut GraphicsElement<RecordingApi>) -> Result<(), GraphicsError> {
        self.events.borrow_mut().push("init".to_owned());
        Ok(())
    }

    fn input(&mut self, _keyboard: &mut Keyboard, mouse: &mut Mouse) {
        let direction = mouse.position_direction();
        self.events
            .borrow_mut()
            .push(format!("input({}, {})", direction.x, direction.y));
    }

    fn update(&mut self, timestamp: f64) {
        self.events.borrow_mut().push(format!("update({timestamp})"));
    }

    fn render(&mut self, _element: &GraphicsElement<RecordingApi>) -> Result<(), GraphicsError> {
        self.events.borrow_mut().push("render".to_owned());
        if self.fail_render {
            return Err(GraphicsError::Backend("injected render failure".to_owned()));
        }
        Ok(())
    }

    fn end_frame(&mut self) {
        self.events.borrow_mut().push("end_frame".to_owned());
    }
}

/// Drawable double that records its own hook invocations.
pub struct RecordingObject {
    id: u32,
    events: Rc<RefCell<Vec<String>>>,
    position: Vector3,
    rotation: Vector3,
    scale: f32,
}

impl RecordingObject {
    pub fn new(id: u32, events: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            id,
            events,
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: 1.0,
        }
    }
}

impl GraphicsObject<RecordingApi> for RecordingObject {
    fn id(&self) -> u32 {
        self.id
    }

    fn init(&mut self, _program: &ShaderProgram<RecordingApi>) -> Result<(), GraphicsError> {
        self.events.borrow_mut().push(format!("init({})", self.id));
        Ok(())
    }

    fn render(&mut self, _program: &ShaderProgram<RecordingApi>) -> Result<(), GraphicsError> {
        self.events.borrow_mut().push(format!("render({})", self.id));
        Ok(())
    }

    fn update(&mut self) {
        self.events.borrow_mut().push(format!("update({})", self.id));
    }

    fn position(&self) -> Vector3 {
        self.position
    }

    fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    fn rotation(&self) -> Vector3 {
        self.rotation
    }

    fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vector3::new(x, y, z);
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// A three-vertex mesh with enough data to exercise every attribute slot.
pub fn triangle_mesh() -> Mesh {
    Mesh::new(
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        vec![0, 1, 2],
        3,
    )
}

/// A program with both stages compiled and linked against the double.
pub fn linked_program(api: &Rc<RecordingApi>, id: u32) -> ShaderProgram<RecordingApi> {
    let mut program = ShaderProgram::new(api.clone(), id).expect("program creation");
    program.create_vertex_shader("vertex source");
    program.create_fragment_shader("fragment source");
    program.attach_shaders();
    program
}
