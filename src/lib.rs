//! prism-ngin
//!
//! A small real-time 3D rendering engine core. The crate owns transform
//! math, shader program and draw-resource lifecycle, buffered keyboard and
//! mouse input, a first-person camera and the frame loop that ties them
//! together; the actual GPU context stays behind the [`graphics::GraphicsApi`]
//! trait so any GL-style backend can plug in.
//!
//! High-level modules
//! - `math`: column-major matrix builders and the small vector types
//! - `controls`: bounded event buffers for keyboard and mouse input
//! - `graphics`: the GPU capability trait, shader programs and drawables
//! - `camera`: first-person camera with intent-based movement
//! - `scene`: camera plus shader program orchestration
//! - `element`: render surface paired with its input devices
//! - `flow`: the externally clocked frame loop
//! - `shell`: winit-backed window host that drives the loop
//!

pub mod camera;
pub mod controls;
pub mod element;
pub mod flow;
pub mod graphics;
pub mod math;
pub mod scene;
pub mod shell;

// Re-exports commonly used types for convenience in downstream code.
pub use camera::Camera;
pub use element::{GraphicsElement, Surface};
pub use flow::{FrameControl, FrameTimer, GraphicsApp, GraphicsLogic, Phase};
pub use graphics::{
    GraphicsApi, GraphicsError, GraphicsModel, GraphicsObject, Mesh, ShaderProgram,
};
pub use math::{Matrix4, Vector3, Vector4};
pub use scene::Scene;
pub use shell::{AppConstructor, WindowConfig};
