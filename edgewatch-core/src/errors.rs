//! Error Types for Sensor Construction, Recording and Notification
//!
//! ## Design Philosophy
//!
//! Sensor errors come back from `record()` and from sensor construction, so
//! they follow the same rules as the rest of the core:
//!
//! 1. **Small Size**: `SensorError` is `Copy` and carries only numbers.
//!
//! 2. **No Heap Allocation**: nothing in the recording path allocates, errors
//!    included.
//!
//! 3. **Actionable Information**: a rejected window size reports both the
//!    requested size and the ceiling it broke.
//!
//! Notification errors are different: they describe an external channel, so
//! they carry the channel label and an owned reason string.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use edgewatch_core::{Sensor, SensorError, TemperatureSensor};
//!
//! let mut sensor = TemperatureSensor::new("T1");
//!
//! match sensor.record(f64::NAN) {
//!     Ok(()) => {}
//!     Err(SensorError::InvalidValue) => {
//!         // Reading dropped, window unchanged
//!     }
//!     Err(_) => {}
//! }
//! assert!(sensor.is_empty());
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Result type for notifier deliveries
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Sensor errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Window size is zero or above the compile-time ceiling
    #[error("Window size {requested} outside range [1, {max}]")]
    InvalidWindowSize {
        /// Size asked for in the sensor configuration
        requested: usize,
        /// Largest window the buffer can hold
        max: usize,
    },

    /// Reading is NaN or infinite, before or after calibration
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Calibration offset is NaN or infinite
    #[error("Invalid calibration offset: not a finite number")]
    InvalidCalibration,

    /// Alert threshold is NaN or infinite
    #[error("Invalid alert threshold: not a finite number")]
    InvalidThreshold,
}

/// Notification delivery errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifyError {
    /// Channel cannot accept messages at all
    #[error("{channel} channel unavailable")]
    ChannelUnavailable {
        /// Channel label, e.g. "email"
        channel: &'static str,
    },

    /// Channel accepted the message but delivery failed
    #[error("{channel} delivery failed: {reason}")]
    DeliveryFailed {
        /// Channel label, e.g. "webhook"
        channel: &'static str,
        /// Underlying cause
        reason: String,
    },
}

impl NotifyError {
    /// Label of the channel that failed
    pub fn channel(&self) -> &'static str {
        match self {
            Self::ChannelUnavailable { channel } => channel,
            Self::DeliveryFailed { channel, .. } => channel,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidWindowSize { requested, max } =>
                defmt::write!(fmt, "Window size {} outside [1, {}]", requested, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::InvalidCalibration =>
                defmt::write!(fmt, "Invalid calibration"),
            Self::InvalidThreshold =>
                defmt::write!(fmt, "Invalid threshold"),
        }
    }
}
