//! Well-known host key codes.

/// Keys the engine itself cares about, named by their host key-code string.
///
/// The codes follow the physical-key naming winit debug-formats its
/// `KeyCode` variants to (`"KeyW"`, `"Space"`, `"ShiftLeft"`, ...), which is
/// also what the state map in [`crate::controls::Keyboard`] is keyed by.
/// Arbitrary codes outside this list still flow through the buffers
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LeftShift,
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// The host key-code string for this key.
    pub const fn code(self) -> &'static str {
        match self {
            Key::W => "KeyW",
            Key::A => "KeyA",
            Key::S => "KeyS",
            Key::D => "KeyD",
            Key::Space => "Space",
            Key::LeftShift => "ShiftLeft",
            Key::Escape => "Escape",
            Key::Enter => "Enter",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
        }
    }
}
