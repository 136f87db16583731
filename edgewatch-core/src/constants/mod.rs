//! Constants for EdgeWatch
//!
//! Default thresholds, window limits and unit labels live here so every
//! module agrees on them. Sensor code should import from the submodules
//! instead of repeating literals.
//!
//! ```rust
//! use edgewatch_core::constants::sensors::{DEFAULT_WINDOW_SIZE, TEMP_ALERT_THRESHOLD_C};
//!
//! assert_eq!(DEFAULT_WINDOW_SIZE, 5);
//! assert_eq!(TEMP_ALERT_THRESHOLD_C, 80.0);
//! ```

pub mod buffers;
pub mod sensors;
