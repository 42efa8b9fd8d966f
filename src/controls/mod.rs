//! Buffered keyboard and mouse input.
//!
//! Raw host notifications (key up/down, cursor movement, button clicks) are
//! absorbed into fixed-capacity event queues plus instantaneous state, and
//! drained during the frame's input phase. Both sides run on the same thread;
//! the only lossy behavior is oldest-first eviction when more than
//! [`EVENT_BUFFER_CAPACITY`] events arrive between drains.

pub mod events;
pub mod key;
pub mod keyboard;
pub mod mouse;
pub mod queue;

pub use events::{KeyboardEvent, KeyboardEventKind, MouseEvent, MouseEventKind, MousePosition};
pub use key::Key;
pub use keyboard::Keyboard;
pub use mouse::Mouse;
pub use queue::{BoundedQueue, QueueEmpty};

/// How many events the keyboard and mouse buffers retain before evicting the
/// oldest entries.
pub const EVENT_BUFFER_CAPACITY: usize = 16;
