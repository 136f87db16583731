//! Sliding-Window Sensors
//!
//! ## Overview
//!
//! A sensor turns raw readings into a short history and decides whether that
//! history is alarming. The two halves are kept apart:
//!
//! - **Shared state** ([`SensorCore`]): id, calibration offset and the
//!   sliding window. Recording, averaging and window bookkeeping live here.
//! - **Alert predicate** (one struct per variant): what counts as alarming.
//!
//! | Variant | Predicate | Default | Unit |
//! |---------|-----------|---------|------|
//! | [`TemperatureSensor`] | `average >= threshold` | 80.0 | °C |
//! | [`VibrationSensor`] | `abs(average) >= threshold` | 2.5 | m/s² |
//! | [`MotionSensor`] | `sample std dev >= threshold`, needs 2 readings | 1.0 | m/s |
//!
//! ## Calibration
//!
//! Each sensor carries one additive offset applied to every raw reading
//! before it enters the window. The offset is fixed at construction.
//!
//! ## Sharing
//!
//! The alert manager and the light controller observe the same sensors the
//! caller keeps feeding, so sensors are handed around as [`Shared`] handles:
//!
//! ```rust
//! use edgewatch_core::{shared, MotionSensor, Sensor};
//!
//! let motion = shared(MotionSensor::new("M1"));
//! let observer = motion.clone();
//!
//! motion.borrow_mut().record(0.4)?;
//! assert_eq!(observer.borrow().len(), 1);
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use edgewatch_core::{SensorConfig, TemperatureSensor};
//!
//! let config = SensorConfig::new("boiler")
//!     .window_size(10)
//!     .calibration_offset(-0.5);
//!
//! let sensor = TemperatureSensor::from_config(config)?.with_threshold(95.0)?;
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use crate::{
    buffer::SlidingWindow,
    constants::sensors::{DEFAULT_CALIBRATION_OFFSET, DEFAULT_WINDOW_SIZE},
    errors::{SensorError, SensorResult},
    stats,
};

mod motion;
mod temperature;
mod vibration;

pub use motion::MotionSensor;
pub use temperature::TemperatureSensor;
pub use vibration::VibrationSensor;

/// Handle to a sensor observed from several places
pub type Shared<S> = Rc<RefCell<S>>;

/// Wrap a sensor in a [`Shared`] handle
pub fn shared<S>(sensor: S) -> Shared<S> {
    Rc::new(RefCell::new(sensor))
}

/// Construction parameters common to every sensor variant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Sensor identifier
    pub id: String,
    /// Readings kept in the sliding window
    pub window_size: usize,
    /// Added to every raw reading before storage
    pub calibration_offset: f64,
}

impl SensorConfig {
    /// Configuration with default window size and no calibration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            window_size: DEFAULT_WINDOW_SIZE,
            calibration_offset: DEFAULT_CALIBRATION_OFFSET,
        }
    }

    /// Set the sliding window size
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the calibration offset
    pub fn calibration_offset(mut self, offset: f64) -> Self {
        self.calibration_offset = offset;
        self
    }
}

/// Accept a finite alert threshold
pub(crate) fn checked_threshold(threshold: f64) -> SensorResult<f64> {
    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(SensorError::InvalidThreshold)
    }
}

/// Windowed state shared by all sensor variants
///
/// Fields are private: the window only changes through [`record`](Self::record)
/// and the offset never changes after construction.
#[derive(Debug, Clone)]
pub struct SensorCore {
    id: String,
    calibration_offset: f64,
    window: SlidingWindow,
}

impl SensorCore {
    /// Core with the default window and no calibration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            calibration_offset: DEFAULT_CALIBRATION_OFFSET,
            window: SlidingWindow::default(),
        }
    }

    /// Build from a configuration, validating window size and offset
    pub fn from_config(config: SensorConfig) -> SensorResult<Self> {
        if !config.calibration_offset.is_finite() {
            return Err(SensorError::InvalidCalibration);
        }

        let window = SlidingWindow::new(config.window_size)?;

        Ok(Self {
            id: config.id,
            calibration_offset: config.calibration_offset,
            window,
        })
    }

    /// Sensor identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Store `value + calibration_offset`, evicting the oldest reading if full
    ///
    /// Non-finite readings are rejected and leave the window untouched.
    pub fn record(&mut self, value: f64) -> SensorResult<()> {
        let calibrated = value + self.calibration_offset;

        if !calibrated.is_finite() {
            log_warn!("sensor {}: rejected non-finite reading {}", self.id, value);
            return Err(SensorError::InvalidValue);
        }

        self.window.push(calibrated);
        log_debug!(
            "sensor {}: recorded {} ({} in window)",
            self.id,
            calibrated,
            self.window.len()
        );

        Ok(())
    }

    /// Mean of the window, `0.0` when empty
    pub fn average(&self) -> f64 {
        stats::mean(self.window.iter())
    }

    /// Sample standard deviation of the window, `None` below two readings
    pub fn std_dev(&self) -> Option<f64> {
        stats::sample_std_dev(self.window.iter())
    }

    /// Readings currently in the window, oldest first
    pub fn readings(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }

    /// Most recent calibrated reading
    pub fn latest(&self) -> Option<f64> {
        self.window.latest()
    }

    /// Number of readings in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Configured window size
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn calibration_applied_before_storage() {
        let config = SensorConfig::new("T1").calibration_offset(1.5);
        let mut core = SensorCore::from_config(config).unwrap();

        core.record(10.0).unwrap();
        assert_eq!(core.latest(), Some(11.5));
    }

    #[test]
    fn average_of_empty_is_zero() {
        let core = SensorCore::new("T1");
        assert_eq!(core.average(), 0.0);
    }

    #[test]
    fn window_keeps_last_values() {
        let config = SensorConfig::new("T1").window_size(3);
        let mut core = SensorCore::from_config(config).unwrap();

        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            core.record(v).unwrap();
        }

        assert_eq!(core.readings().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert!((core.average() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite() {
        let mut core = SensorCore::new("T1");
        core.record(1.0).unwrap();

        assert_eq!(core.record(f64::NAN), Err(SensorError::InvalidValue));
        assert_eq!(core.record(f64::INFINITY), Err(SensorError::InvalidValue));
        assert_eq!(core.len(), 1);
    }

    #[test]
    fn rejects_bad_config() {
        let zero = SensorConfig::new("T1").window_size(0);
        assert!(matches!(
            SensorCore::from_config(zero),
            Err(SensorError::InvalidWindowSize { requested: 0, .. })
        ));

        let nan = SensorConfig::new("T1").calibration_offset(f64::NAN);
        assert!(matches!(
            SensorCore::from_config(nan),
            Err(SensorError::InvalidCalibration)
        ));
    }

    #[test]
    fn defaults() {
        let core = SensorCore::new("X");
        assert_eq!(core.id(), "X");
        assert_eq!(core.window_size(), DEFAULT_WINDOW_SIZE);
    }
}
