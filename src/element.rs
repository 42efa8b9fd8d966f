//! The drawing element: a render surface plus the input devices attached
//! to it.
//!
//! A [`GraphicsElement`] pairs the graphics context with one [`Surface`]
//! and owns the keyboard and mouse that surface feeds. The windowing shell
//! forwards host events into the devices; the frame loop reads them back
//! out through the element.

use std::rc::Rc;

use crate::controls::{Keyboard, Mouse};
use crate::graphics::GraphicsApi;
use crate::math::Vector3;

/// Where rendered frames end up, as far as the engine cares: a pixel size
/// and a way to ask whether the host wants the element gone.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn should_close(&self) -> bool;
}

pub struct GraphicsElement<A: GraphicsApi> {
    api: Rc<A>,
    surface: Box<dyn Surface>,
    keyboard: Keyboard,
    mouse: Mouse,
    space_color: Vector3,
}

impl<A: GraphicsApi> GraphicsElement<A> {
    /// Couples the context to a surface. Depth testing and blending are
    /// switched on here; the background starts out black.
    pub fn new(api: Rc<A>, surface: Box<dyn Surface>) -> Self {
        api.enable_depth_test();
        api.enable_blend();

        Self {
            api,
            surface,
            keyboard: Keyboard::new(),
            mouse: Mouse::new(),
            space_color: Vector3::zero(),
        }
    }

    /// Sizes the viewport to the surface. Call once before the first frame.
    pub fn init(&mut self) {
        self.resize(self.surface.width(), self.surface.height());
    }

    /// Clears the frame to the space color.
    pub fn render(&self) {
        self.api.set_clear_color(
            self.space_color.x,
            self.space_color.y,
            self.space_color.z,
            1.0,
        );

        self.api.clear_color_buffer();
        self.api.clear_depth_buffer();
    }

    /// Matches the viewport to a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.api.set_viewport(0, 0, width as i32, height as i32);
    }

    /// Per-frame device upkeep, before user logic updates.
    pub fn update(&mut self) {
        self.mouse.update_position_direction();
    }

    pub fn should_close(&self) -> bool {
        self.surface.should_close()
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn api(&self) -> &Rc<A> {
        &self.api
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn mouse_mut(&mut self) -> &mut Mouse {
        &mut self.mouse
    }

    /// Both devices at once, for callers that feed one into the other.
    pub fn controls_mut(&mut self) -> (&mut Keyboard, &mut Mouse) {
        (&mut self.keyboard, &mut self.mouse)
    }

    /// Sets the background color, components in `0.0..=1.0`.
    pub fn set_space_color(&mut self, red: f32, green: f32, blue: f32) {
        self.space_color = Vector3::new(red, green, blue);
    }

    pub fn space_color(&self) -> Vector3 {
        self.space_color
    }
}
