//! GPU-facing half of the engine.
//!
//! - [`api`] is the capability trait a concrete graphics context implements.
//! - [`shader`] wraps program compilation, linking and uniform attachment.
//! - [`object`] and [`model`] are the drawables a program services.
//! - [`mesh`] is the CPU-side vertex data those drawables upload.

pub mod api;
pub mod mesh;
pub mod model;
pub mod object;
pub mod shader;

pub use api::{
    BoundProgram, BoundVertexArray, BufferHandle, CompilationStatus, GraphicsApi, GraphicsError,
    ProgramHandle, ShaderHandle, ShaderStage, UniformLocation, VertexArrayHandle,
};
pub use mesh::Mesh;
pub use model::GraphicsModel;
pub use object::{DrawResources, GraphicsObject};
pub use shader::ShaderProgram;
