//! Keyboard input buffering and key state.

use std::collections::HashMap;

use crate::controls::events::{KeyboardEvent, KeyboardEventKind};
use crate::controls::key::Key;
use crate::controls::queue::BoundedQueue;
use crate::controls::EVENT_BUFFER_CAPACITY;

/// Bounded replay queues for key and character events, plus a pressed-state
/// map keyed by host key-code string.
#[derive(Debug)]
pub struct Keyboard {
    key_buffer: BoundedQueue<KeyboardEvent>,
    char_buffer: BoundedQueue<char>,
    key_states: HashMap<String, bool>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            key_buffer: BoundedQueue::new(EVENT_BUFFER_CAPACITY),
            char_buffer: BoundedQueue::new(EVENT_BUFFER_CAPACITY),
            key_states: HashMap::new(),
        }
    }

    /// Whether `key` is currently held down.
    ///
    /// A code that was never observed reads as `false` and gets a `false`
    /// entry recorded on first query, so later host notifications toggle an
    /// entry that already exists.
    pub fn key_is_pressed(&mut self, key: Key) -> bool {
        self.code_is_pressed(key.code())
    }

    /// [`Self::key_is_pressed`] for an arbitrary host key-code string.
    pub fn code_is_pressed(&mut self, code: &str) -> bool {
        match self.key_states.get(code) {
            Some(&pressed) => pressed,
            None => {
                self.key_states.insert(code.to_owned(), false);
                false
            }
        }
    }

    /// Pops the oldest key event, or an invalid sentinel when the buffer is
    /// empty. Never fails.
    pub fn read_key(&mut self) -> KeyboardEvent {
        self.key_buffer.poll().unwrap_or_else(|_| KeyboardEvent::invalid())
    }

    /// Pops the oldest typed character, if any.
    pub fn read_char(&mut self) -> Option<char> {
        self.char_buffer.poll().ok()
    }

    pub fn keys_are_empty(&self) -> bool {
        self.key_buffer.is_empty()
    }

    pub fn chars_are_empty(&self) -> bool {
        self.char_buffer.is_empty()
    }

    /// Records a key-down notification from the host.
    pub fn on_key_pressed(&mut self, code: &str) {
        self.key_states.insert(code.to_owned(), true);
        self.key_buffer
            .push(KeyboardEvent::new(KeyboardEventKind::Press, code));
    }

    /// Records a key-up notification from the host.
    pub fn on_key_released(&mut self, code: &str) {
        self.key_states.insert(code.to_owned(), false);
        self.key_buffer
            .push(KeyboardEvent::new(KeyboardEventKind::Release, code));
    }

    /// Records a typed character from the host.
    pub fn on_char(&mut self, ch: char) {
        self.char_buffer.push(ch);
    }

    pub fn flush_keys(&mut self) {
        self.key_buffer.flush();
    }

    pub fn flush_chars(&mut self) {
        self.char_buffer.flush();
    }

    /// Drains both buffers. The pressed-state map is left untouched.
    pub fn flush(&mut self) {
        self.flush_keys();
        self.flush_chars();
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
