//! Immutable keyboard and mouse event values.
//!
//! Events snapshot the state they report at construction time; they never
//! hold a live reference back into the device that produced them.

/// What a [`KeyboardEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventKind {
    Press,
    Release,
    /// Sentinel kind handed out when the event buffer is drained empty.
    Invalid,
}

/// A single key press or release, tagged with the host key code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    kind: KeyboardEventKind,
    code: String,
}

impl KeyboardEvent {
    pub fn new(kind: KeyboardEventKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }

    /// The sentinel returned for reads from an empty buffer.
    pub fn invalid() -> Self {
        Self::new(KeyboardEventKind::Invalid, "")
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyboardEventKind::Press
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyboardEventKind::Release
    }

    pub fn is_valid(&self) -> bool {
        self.kind != KeyboardEventKind::Invalid
    }

    pub fn kind(&self) -> KeyboardEventKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A cursor position in surface-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MousePosition {
    pub x: f32,
    pub y: f32,
}

impl MousePosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a [`MouseEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    LeftPress,
    LeftRelease,
    RightPress,
    RightRelease,
    WheelUp,
    WheelDown,
    Move,
    Enter,
    Leave,
    /// Sentinel kind handed out when the event buffer is drained empty.
    Invalid,
}

/// A mouse notification plus a snapshot of the cursor position and button
/// state at the moment the event was constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    kind: MouseEventKind,
    position: MousePosition,
    left_pressed: bool,
    right_pressed: bool,
}

impl MouseEvent {
    pub fn new(
        kind: MouseEventKind,
        position: MousePosition,
        left_pressed: bool,
        right_pressed: bool,
    ) -> Self {
        Self {
            kind,
            position,
            left_pressed,
            right_pressed,
        }
    }

    /// The sentinel returned for reads from an empty buffer.
    pub fn invalid() -> Self {
        Self::new(MouseEventKind::Invalid, MousePosition::default(), false, false)
    }

    pub fn is_valid(&self) -> bool {
        self.kind != MouseEventKind::Invalid
    }

    pub fn kind(&self) -> MouseEventKind {
        self.kind
    }

    pub fn position(&self) -> MousePosition {
        self.position
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn is_right_pressed(&self) -> bool {
        self.right_pressed
    }
}
