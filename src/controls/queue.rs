//! Capacity-bounded FIFO queue with oldest-first eviction.

use std::collections::VecDeque;

use thiserror::Error;

/// Error returned when polling an empty [`BoundedQueue`].
///
/// Only the raw queue primitive fails this way; the keyboard and mouse
/// buffers intercept emptiness and hand out an invalid-event sentinel
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no elements in the queue")]
pub struct QueueEmpty;

/// A FIFO queue that never grows past its capacity: pushing onto a full
/// queue silently evicts the oldest entries.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `element`, dropping oldest entries while the queue is over
    /// capacity.
    pub fn push(&mut self, element: T) {
        self.entries.push_back(element);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Removes and returns the oldest entry.
    pub fn poll(&mut self) -> Result<T, QueueEmpty> {
        self.entries.pop_front().ok_or(QueueEmpty)
    }

    /// Returns the oldest entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drains the queue to empty.
    pub fn flush(&mut self) {
        self.entries.clear();
    }
}
