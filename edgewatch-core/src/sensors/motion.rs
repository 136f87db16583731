//! Motion sensor
//!
//! Movement shows up as spread, not level: a person walking past produces
//! readings that jump around, a still room produces flat ones. The predicate
//! is the sample standard deviation of the window, which needs at least
//! [`MOTION_MIN_SAMPLES`] readings; below that the sensor never alerts.

use alloc::string::String;

use crate::{
    constants::sensors::{MOTION_MIN_SAMPLES, MOTION_MOVEMENT_THRESHOLD},
    errors::SensorResult,
    events::SensorKind,
    traits::Sensor,
};

use super::{checked_threshold, SensorConfig, SensorCore};

/// Motion sensor reading speed in m/s
#[derive(Debug, Clone)]
pub struct MotionSensor {
    core: SensorCore,
    movement_threshold: f64,
}

impl MotionSensor {
    /// Sensor with default window, no calibration and a 1.0 m/s threshold
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            core: SensorCore::new(id),
            movement_threshold: MOTION_MOVEMENT_THRESHOLD,
        }
    }

    /// Sensor from an explicit configuration
    pub fn from_config(config: SensorConfig) -> SensorResult<Self> {
        Ok(Self {
            core: SensorCore::from_config(config)?,
            movement_threshold: MOTION_MOVEMENT_THRESHOLD,
        })
    }

    /// Override the alert threshold
    ///
    /// Fails with [`SensorError::InvalidThreshold`](crate::SensorError::InvalidThreshold)
    /// for NaN or infinity.
    pub fn with_threshold(mut self, threshold: f64) -> SensorResult<Self> {
        self.movement_threshold = checked_threshold(threshold)?;
        Ok(self)
    }

    /// Current alert threshold (m/s)
    pub fn threshold(&self) -> f64 {
        self.movement_threshold
    }

    /// Sample standard deviation of the window
    pub fn std_dev(&self) -> Option<f64> {
        self.core.std_dev()
    }
}

impl Sensor for MotionSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Motion
    }

    fn is_in_alert(&self) -> bool {
        if self.core.len() < MOTION_MIN_SAMPLES {
            return false;
        }

        self.core
            .std_dev()
            .map_or(false, |sd| sd >= self.movement_threshold)
    }
}
