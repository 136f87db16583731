//! Temperature sensor
//!
//! Alerts when the window average reaches the threshold. A single hot
//! reading is smoothed out by the rest of the window; a sustained rise is not.

use alloc::string::String;

use crate::{
    constants::sensors::TEMP_ALERT_THRESHOLD_C,
    errors::SensorResult,
    events::SensorKind,
    traits::Sensor,
};

use super::{checked_threshold, SensorConfig, SensorCore};

/// Temperature sensor reading in Celsius
#[derive(Debug, Clone)]
pub struct TemperatureSensor {
    core: SensorCore,

    /// Average at or above which the sensor alerts (°C)
    alert_threshold: f64,
}

impl TemperatureSensor {
    /// Sensor with default window, no calibration and an 80 °C threshold
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            core: SensorCore::new(id),
            alert_threshold: TEMP_ALERT_THRESHOLD_C,
        }
    }

    /// Sensor from an explicit configuration
    pub fn from_config(config: SensorConfig) -> SensorResult<Self> {
        Ok(Self {
            core: SensorCore::from_config(config)?,
            alert_threshold: TEMP_ALERT_THRESHOLD_C,
        })
    }

    /// Override the alert threshold
    ///
    /// Fails with [`SensorError::InvalidThreshold`](crate::SensorError::InvalidThreshold)
    /// for NaN or infinity.
    pub fn with_threshold(mut self, threshold: f64) -> SensorResult<Self> {
        self.alert_threshold = checked_threshold(threshold)?;
        Ok(self)
    }

    /// Current alert threshold (°C)
    pub fn threshold(&self) -> f64 {
        self.alert_threshold
    }
}

impl Sensor for TemperatureSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn is_in_alert(&self) -> bool {
        self.average() >= self.alert_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SensorError;

    #[test]
    fn hot_readings_alert() {
        let mut sensor = TemperatureSensor::new("T1");

        for v in [90.0, 104.0, 156.0] {
            sensor.record(v).unwrap();
        }

        assert!((sensor.average() - 116.666_666).abs() < 1e-4);
        assert!(sensor.is_in_alert());
    }

    #[test]
    fn cool_readings_do_not_alert() {
        let mut sensor = TemperatureSensor::new("T1");
        sensor.record(10.0).unwrap();
        sensor.record(20.0).unwrap();

        assert!(!sensor.is_in_alert());
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut sensor = TemperatureSensor::new("T1").with_threshold(50.0).unwrap();
        sensor.record(50.0).unwrap();

        assert!(sensor.is_in_alert());
    }

    #[test]
    fn huge_readings_average_without_overflow() {
        let mut sensor = TemperatureSensor::new("T1").with_threshold(f64::MAX).unwrap();

        for v in [1.5e308, 1.5e308, -1e308] {
            sensor.record(v).unwrap();
        }

        // True mean is about 6.67e307, well under the threshold
        assert!(sensor.average().is_finite());
        assert!(!sensor.is_in_alert());
    }

    #[test]
    fn non_finite_threshold_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                TemperatureSensor::new("T1").with_threshold(bad).unwrap_err(),
                SensorError::InvalidThreshold
            );
        }
    }

    #[test]
    fn empty_sensor_is_quiet() {
        let sensor = TemperatureSensor::new("T1");
        assert!(!sensor.is_in_alert());
        assert_eq!(sensor.unit(), "°C");
    }

    #[test]
    fn calibration_can_push_into_alert() {
        let config = SensorConfig::new("T2").calibration_offset(5.0);
        let mut sensor = TemperatureSensor::from_config(config).unwrap();
        sensor.record(76.0).unwrap();

        assert_eq!(sensor.average(), 81.0);
        assert!(sensor.is_in_alert());
    }
}
