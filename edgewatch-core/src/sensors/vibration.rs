//! Vibration sensor
//!
//! The threshold is called an RMS threshold, but the predicate compares the
//! absolute value of the window mean, not a root-mean-square. Readings of
//! opposite sign therefore cancel out.

use alloc::string::String;

use crate::{
    constants::sensors::VIBRATION_RMS_THRESHOLD,
    errors::SensorResult,
    events::SensorKind,
    traits::Sensor,
};

use super::{checked_threshold, SensorConfig, SensorCore};

/// Vibration sensor reading acceleration in m/s²
#[derive(Debug, Clone)]
pub struct VibrationSensor {
    core: SensorCore,
    rms_threshold: f64,
}

impl VibrationSensor {
    /// Sensor with default window, no calibration and a 2.5 m/s² threshold
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            core: SensorCore::new(id),
            rms_threshold: VIBRATION_RMS_THRESHOLD,
        }
    }

    /// Sensor from an explicit configuration
    pub fn from_config(config: SensorConfig) -> SensorResult<Self> {
        Ok(Self {
            core: SensorCore::from_config(config)?,
            rms_threshold: VIBRATION_RMS_THRESHOLD,
        })
    }

    /// Override the alert threshold
    ///
    /// Fails with [`SensorError::InvalidThreshold`](crate::SensorError::InvalidThreshold)
    /// for NaN or infinity.
    pub fn with_threshold(mut self, threshold: f64) -> SensorResult<Self> {
        self.rms_threshold = checked_threshold(threshold)?;
        Ok(self)
    }

    /// Current alert threshold (m/s²)
    pub fn threshold(&self) -> f64 {
        self.rms_threshold
    }
}

impl Sensor for VibrationSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Vibration
    }

    fn is_in_alert(&self) -> bool {
        libm::fabs(self.average()) >= self.rms_threshold
    }
}
