//! Sensor Defaults and Unit Labels
//!
//! Default alert thresholds for each sensor variant. Deployments override
//! them with the `with_threshold` builders.

pub use super::buffers::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};

// ===== TEMPERATURE =====

/// Average temperature at or above which a temperature sensor alerts (°C).
pub const TEMP_ALERT_THRESHOLD_C: f64 = 80.0;

/// Unit label for temperature readings.
pub const TEMP_UNIT: &str = "°C";

// ===== VIBRATION =====

/// Absolute average acceleration at or above which a vibration sensor
/// alerts (m/s²).
///
/// Named after RMS but compared against the absolute mean of the window.
pub const VIBRATION_RMS_THRESHOLD: f64 = 2.5;

/// Unit label for vibration readings.
pub const VIBRATION_UNIT: &str = "m/s²";

// ===== MOTION =====

/// Sample standard deviation at or above which a motion sensor alerts (m/s).
pub const MOTION_MOVEMENT_THRESHOLD: f64 = 1.0;

/// Readings required before a motion sensor can alert.
///
/// Sample standard deviation is undefined below two values.
pub const MOTION_MIN_SAMPLES: usize = 2;

/// Unit label for motion readings.
pub const MOTION_UNIT: &str = "m/s";

// ===== CALIBRATION =====

/// Calibration offset applied when none is configured.
pub const DEFAULT_CALIBRATION_OFFSET: f64 = 0.0;
