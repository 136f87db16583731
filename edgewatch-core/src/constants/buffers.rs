//! Sliding Window Sizing

/// Readings kept per sensor unless configured otherwise.
///
/// Five samples smooth single-sample spikes while still reacting within a
/// few readings.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest window any sensor can be configured with.
///
/// The window is a fixed-capacity deque, so this is also the storage
/// reserved per sensor: 64 × 8 bytes = 512 bytes.
pub const MAX_WINDOW_SIZE: usize = 64;
