//! First-person camera: input intent, movement and the matrices it yields.
//!
//! Each frame the camera first collects *intent* from the input devices
//! (which axes the player wants to move along, how the cursor travelled),
//! then applies that intent scaled by its speed and sensitivity when it is
//! rendered. Yaw and pitch are kept in degrees; conversion to radians
//! happens where the matrices are built.

use crate::controls::{Key, Keyboard, Mouse};
use crate::math::{self, Matrix4, Vector3};

const DEFAULT_SPEED: f32 = 0.001;
const DEFAULT_SENSITIVITY: f32 = 0.1;

pub struct Camera {
    position: Vector3,
    rotation: Vector3,
    /// Vertical field of view in radians.
    field_of_view: f32,
    near_clipping_plane: f32,
    far_clipping_plane: f32,
    speed: f32,
    sensitivity: f32,
    movement_intent: Vector3,
    rotation_intent: Vector3,
}

impl Camera {
    /// Builds a camera at the origin looking down negative Z.
    /// `field_of_view` is given in degrees.
    pub fn new(field_of_view: f32, near_clipping_plane: f32, far_clipping_plane: f32) -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            field_of_view: math::degrees_to_radians(field_of_view),
            near_clipping_plane,
            far_clipping_plane,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            movement_intent: Vector3::zero(),
            rotation_intent: Vector3::zero(),
        }
    }

    /// Collects this frame's movement and rotation intent from the devices.
    pub fn input(&mut self, keyboard: &mut Keyboard, mouse: &Mouse) {
        self.keyboard_input(keyboard);
        self.mouse_input(mouse);
    }

    /// Applies the collected intent: movement scaled by speed, rotation by
    /// sensitivity. Roll is never touched.
    pub fn render(&mut self) {
        self.move_by(
            self.movement_intent.x * self.speed,
            self.movement_intent.y * self.speed,
            self.movement_intent.z * self.speed,
        );

        self.rotate_by(
            self.rotation_intent.x * self.sensitivity,
            self.rotation_intent.y * self.sensitivity,
            0.0,
        );
    }

    fn keyboard_input(&mut self, keyboard: &mut Keyboard) {
        self.movement_intent = Vector3::zero();

        if keyboard.key_is_pressed(Key::W) {
            self.movement_intent.z = -1.0;
        } else if keyboard.key_is_pressed(Key::S) {
            self.movement_intent.z = 1.0;
        }

        if keyboard.key_is_pressed(Key::A) {
            self.movement_intent.x = -1.0;
        } else if keyboard.key_is_pressed(Key::D) {
            self.movement_intent.x = 1.0;
        }

        if keyboard.key_is_pressed(Key::Space) {
            self.movement_intent.y = 1.0;
        } else if keyboard.key_is_pressed(Key::LeftShift) {
            self.movement_intent.y = -1.0;
        }
    }

    // Look input only counts while the right button is held down.
    fn mouse_input(&mut self, mouse: &Mouse) {
        self.rotation_intent = Vector3::zero();

        if mouse.is_right_pressed() {
            let mouse_direction = mouse.position_direction();

            self.rotation_intent.x = mouse_direction.x;
            self.rotation_intent.y = mouse_direction.y;
        }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    /// Moves relative to the camera's yaw: `z` walks along the view
    /// direction, `x` strafes, `y` is world-vertical and unaffected by
    /// orientation.
    pub fn move_by(&mut self, x: f32, y: f32, z: f32) {
        if z != 0.0 {
            self.position.x += math::degrees_to_radians(self.rotation.y).sin() * -1.0 * z;
            self.position.z += math::degrees_to_radians(self.rotation.y).cos() * z;
        }

        if x != 0.0 {
            self.position.x += math::degrees_to_radians(self.rotation.y - 90.0).sin() * -1.0 * x;
            self.position.z += math::degrees_to_radians(self.rotation.y - 90.0).cos() * x;
        }

        self.position.y += y;
    }

    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vector3::new(x, y, z);
    }

    /// Adds to the camera's rotation, in degrees per axis.
    pub fn rotate_by(&mut self, x: f32, y: f32, z: f32) {
        self.rotation.x += x;
        self.rotation.y += y;
        self.rotation.z += z;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// The perspective projection for this camera's frustum at the given
    /// width to height ratio.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4 {
        math::projection_matrix(
            aspect_ratio,
            self.field_of_view,
            self.near_clipping_plane,
            self.far_clipping_plane,
        )
    }

    /// The world-to-camera transform for the current position and rotation.
    pub fn view_matrix(&self) -> Matrix4 {
        math::view_matrix(self.position, self.rotation)
    }
}
