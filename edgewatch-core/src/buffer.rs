//! Fixed-Capacity Sliding Window for Sensor Readings
//!
//! ## Overview
//!
//! Every sensor keeps its recent readings in a [`SlidingWindow`]: a FIFO that
//! holds at most `capacity` values and drops the oldest one when a new value
//! arrives on a full window. Averages and alert predicates are computed over
//! whatever the window holds at that moment.
//!
//! ## Storage
//!
//! The window is a `heapless::Deque` sized to [`MAX_WINDOW_SIZE`] at compile
//! time, with the per-sensor capacity enforced at runtime:
//!
//! ```text
//! SlidingWindow { capacity: 3 }
//!
//!   push 1.0  →  [1.0]
//!   push 2.0  →  [1.0, 2.0]
//!   push 3.0  →  [1.0, 2.0, 3.0]        (full)
//!   push 4.0  →  [2.0, 3.0, 4.0]        (1.0 evicted)
//! ```
//!
//! - `push()` is O(1) and never allocates
//! - iteration runs oldest → newest
//! - storage per window is fixed: `MAX_WINDOW_SIZE` × 8 bytes
//!
//! ## Usage Example
//!
//! ```rust
//! use edgewatch_core::buffer::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(3)?;
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(value);
//! }
//!
//! let values: Vec<f64> = window.iter().copied().collect();
//! assert_eq!(values, vec![2.0, 3.0, 4.0]);
//! assert_eq!(window.latest(), Some(4.0));
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```

use heapless::Deque;

use crate::constants::buffers::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
use crate::errors::{SensorError, SensorResult};

/// Bounded FIFO of readings, oldest first
///
/// ## Internal Invariants
///
/// - `1 <= capacity <= MAX_WINDOW_SIZE`
/// - `data.len() <= capacity`
///
/// ## Thread Safety
///
/// Not synchronized. Wrap the owning sensor in a lock before sharing it
/// across threads.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    data: Deque<f64, MAX_WINDOW_SIZE>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` readings
    ///
    /// Fails when `capacity` is zero or above [`MAX_WINDOW_SIZE`].
    pub fn new(capacity: usize) -> SensorResult<Self> {
        if capacity == 0 || capacity > MAX_WINDOW_SIZE {
            return Err(SensorError::InvalidWindowSize {
                requested: capacity,
                max: MAX_WINDOW_SIZE,
            });
        }

        Ok(Self {
            data: Deque::new(),
            capacity,
        })
    }

    /// Append a reading, evicting the oldest one if the window is full
    pub fn push(&mut self, value: f64) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }

        // len < capacity <= MAX_WINDOW_SIZE here, so the deque has room
        let pushed = self.data.push_back(value);
        debug_assert!(pushed.is_ok(), "window deque over capacity");
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the next push will evict a reading
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Maximum number of readings kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<f64> {
        self.data.back().copied()
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone + '_ {
        self.data.iter()
    }

    /// Drop all readings, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self {
            data: Deque::new(),
            capacity: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn empty_window() {
        let window = SlidingWindow::new(5).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert!(window.latest().is_none());
    }

    #[test]
    fn rejects_bad_capacity() {
        assert_eq!(
            SlidingWindow::new(0).unwrap_err(),
            SensorError::InvalidWindowSize { requested: 0, max: MAX_WINDOW_SIZE }
        );
        assert!(SlidingWindow::new(MAX_WINDOW_SIZE + 1).is_err());
        assert!(SlidingWindow::new(MAX_WINDOW_SIZE).is_ok());
    }

    #[test]
    fn fifo_eviction() {
        let mut window = SlidingWindow::new(3).unwrap();

        for i in 0..5 {
            window.push(i as f64);
        }

        assert_eq!(window.len(), 3);
        assert!(window.is_full());

        // 0 and 1 were evicted
        let values: Vec<f64> = window.iter().copied().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn default_capacity() {
        let window = SlidingWindow::default();
        assert_eq!(window.capacity(), DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn full_window_keeps_every_push() {
        let mut window = SlidingWindow::new(MAX_WINDOW_SIZE).unwrap();

        for i in 0..(MAX_WINDOW_SIZE * 2) {
            window.push(i as f64);
        }

        assert_eq!(window.len(), MAX_WINDOW_SIZE);
        assert_eq!(window.latest(), Some((MAX_WINDOW_SIZE * 2 - 1) as f64));
        assert_eq!(window.iter().next(), Some(&(MAX_WINDOW_SIZE as f64)));
    }

    #[test]
    fn iter_is_restartable() {
        let mut window = SlidingWindow::new(3).unwrap();
        window.push(1.0);
        window.push(2.0);

        let iter = window.iter();
        let first: f64 = iter.clone().sum();
        let second: f64 = iter.sum();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut window = SlidingWindow::new(2).unwrap();
        window.push(1.0);
        window.push(2.0);
        window.clear();

        assert!(window.is_empty());
        assert_eq!(window.capacity(), 2);
    }
}
