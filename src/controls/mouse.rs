//! Mouse input buffering, button state and per-frame movement direction.

use crate::controls::events::{MouseEvent, MouseEventKind, MousePosition};
use crate::controls::queue::BoundedQueue;
use crate::controls::EVENT_BUFFER_CAPACITY;
use crate::math::Vector3;

/// Bounded replay queue of mouse events plus last-known cursor position,
/// previous-frame position, button flags and the derived movement direction.
#[derive(Debug)]
pub struct Mouse {
    buffer: BoundedQueue<MouseEvent>,
    position_direction: Vector3,
    position_x: f32,
    position_y: f32,
    previous_position_x: f32,
    previous_position_y: f32,
    left_pressed: bool,
    right_pressed: bool,
    in_element: bool,
}

impl Mouse {
    pub fn new() -> Self {
        Self {
            buffer: BoundedQueue::new(EVENT_BUFFER_CAPACITY),
            position_direction: Vector3::zero(),
            position_x: 0.0,
            position_y: 0.0,
            previous_position_x: 0.0,
            previous_position_y: 0.0,
            left_pressed: false,
            right_pressed: false,
            in_element: false,
        }
    }

    /// A snapshot of the current cursor position.
    pub fn position(&self) -> MousePosition {
        MousePosition::new(self.position_x, self.position_y)
    }

    pub fn is_in_element(&self) -> bool {
        self.in_element
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn is_right_pressed(&self) -> bool {
        self.right_pressed
    }

    /// Pops the oldest event, or an invalid sentinel when the buffer is
    /// empty. Never fails.
    pub fn read(&mut self) -> MouseEvent {
        self.buffer.poll().unwrap_or_else(|_| MouseEvent::invalid())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drains the event buffer.
    pub fn flush(&mut self) {
        self.buffer.flush();
    }

    /// Records a cursor-movement notification.
    pub fn on_mouse_move(&mut self, new_position_x: f32, new_position_y: f32) {
        self.position_x = new_position_x;
        self.position_y = new_position_y;

        self.push_event(MouseEventKind::Move);
    }

    /// Records the cursor leaving the surface.
    pub fn on_mouse_leave(&mut self) {
        self.in_element = false;

        self.push_event(MouseEventKind::Leave);
    }

    /// Records the cursor entering the surface.
    pub fn on_mouse_enter(&mut self) {
        self.in_element = true;

        self.push_event(MouseEventKind::Enter);
    }

    /// Records a left-button press. The reported coordinates are not folded
    /// into the tracked cursor position; only cursor movement updates that.
    pub fn on_left_pressed(&mut self, _position_x: f32, _position_y: f32) {
        self.left_pressed = true;

        self.push_event(MouseEventKind::LeftPress);
    }

    pub fn on_left_released(&mut self, _position_x: f32, _position_y: f32) {
        self.left_pressed = false;

        self.push_event(MouseEventKind::LeftRelease);
    }

    pub fn on_right_pressed(&mut self, _position_x: f32, _position_y: f32) {
        self.right_pressed = true;

        self.push_event(MouseEventKind::RightPress);
    }

    pub fn on_right_released(&mut self, _position_x: f32, _position_y: f32) {
        self.right_pressed = false;

        self.push_event(MouseEventKind::RightRelease);
    }

    pub fn on_wheel_up(&mut self, _position_x: f32, _position_y: f32) {
        self.push_event(MouseEventKind::WheelUp);
    }

    pub fn on_wheel_down(&mut self, _position_x: f32, _position_y: f32) {
        self.push_event(MouseEventKind::WheelDown);
    }

    /// Recomputes the movement direction from the current and previous
    /// cursor positions.
    ///
    /// Must run exactly once per frame, during the update phase: the
    /// direction computed here is what the camera consumes on the next
    /// input pass. Until both previous coordinates have seen a positive
    /// sample the direction stays zero. The component swap is intentional:
    /// vertical cursor travel steers rotation about X, horizontal travel
    /// rotation about Y.
    pub fn update_position_direction(&mut self) {
        self.position_direction.x = 0.0;
        self.position_direction.y = 0.0;

        if self.previous_position_x > 0.0 && self.previous_position_y > 0.0 {
            self.position_direction.x = self.position_y - self.previous_position_y;
            self.position_direction.y = self.position_x - self.previous_position_x;
        }

        self.previous_position_x = self.position_x;
        self.previous_position_y = self.position_y;
    }

    /// The direction computed by the last
    /// [`Self::update_position_direction`] call.
    pub fn position_direction(&self) -> Vector3 {
        self.position_direction
    }

    fn push_event(&mut self, kind: MouseEventKind) {
        self.buffer.push(MouseEvent::new(
            kind,
            self.position(),
            self.left_pressed,
            self.right_pressed,
        ));
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_zero_without_a_prior_sample() {
        let mut mouse = Mouse::new();
        mouse.on_mouse_move(100.0, 50.0);
        mouse.update_position_direction();
        assert_eq!(mouse.position_direction(), Vector3::zero());
    }

    #[test]
    fn direction_swaps_axes_once_primed() {
        let mut mouse = Mouse::new();
        mouse.on_mouse_move(5.0, 5.0);
        mouse.update_position_direction();

        mouse.on_mouse_move(8.0, 10.0);
        mouse.update_position_direction();

        // direction = (currentY - previousY, currentX - previousX)
        let direction = mouse.position_direction();
        assert_eq!(direction.x, 5.0);
        assert_eq!(direction.y, 3.0);
    }

    #[test]
    fn direction_resets_when_the_cursor_rests() {
        let mut mouse = Mouse::new();
        mouse.on_mouse_move(5.0, 5.0);
        mouse.update_position_direction();
        mouse.on_mouse_move(8.0, 10.0);
        mouse.update_position_direction();

        // No movement between frames: the direction decays to zero.
        mouse.update_position_direction();
        assert_eq!(mouse.position_direction(), Vector3::zero());
    }

    #[test]
    fn events_snapshot_position_and_buttons_at_construction() {
        let mut mouse = Mouse::new();
        mouse.on_mouse_move(10.0, 20.0);
        mouse.on_right_pressed(10.0, 20.0);
        mouse.on_mouse_move(30.0, 40.0);
        mouse.on_right_released(30.0, 40.0);

        let moved = mouse.read();
        assert_eq!(moved.kind(), MouseEventKind::Move);
        assert_eq!(moved.position(), MousePosition::new(10.0, 20.0));
        assert!(!moved.is_right_pressed());

        let pressed = mouse.read();
        assert_eq!(pressed.kind(), MouseEventKind::RightPress);
        assert!(pressed.is_right_pressed());
        // Still the old cursor position: button events do not move the cursor.
        assert_eq!(pressed.position(), MousePosition::new(10.0, 20.0));

        let moved_again = mouse.read();
        assert_eq!(moved_again.position(), MousePosition::new(30.0, 40.0));
        assert!(moved_again.is_right_pressed());
    }

    #[test]
    fn read_on_empty_buffer_returns_invalid_sentinel() {
        let mut mouse = Mouse::new();
        assert!(!mouse.read().is_valid());
    }

    #[test]
    fn buffer_keeps_the_latest_sixteen() {
        let mut mouse = Mouse::new();
        for n in 0..24 {
            mouse.on_mouse_move(n as f32, 0.0);
        }
        let mut drained = 0;
        let mut first = None;
        while !mouse.is_empty() {
            let event = mouse.read();
            if first.is_none() {
                first = Some(event.position().x);
            }
            drained += 1;
        }
        assert_eq!(drained, 16);
        assert_eq!(first, Some(8.0));
    }
}
