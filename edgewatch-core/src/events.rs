//! Sensor kinds and alert records
//!
//! [`SensorKind`] names each sensor variant and its unit. An [`Alert`] is
//! what the alert manager produces for every sensor found alarming during an
//! evaluation pass; its [`message`](Alert::message) is the exact text sent to
//! notifiers.

use alloc::string::String;
use core::fmt;

/// Sensor type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SensorKind {
    /// Air or surface temperature
    Temperature = 0,
    /// Acceleration from machinery vibration
    Vibration = 1,
    /// Movement speed
    Motion = 2,
}

impl SensorKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Vibration => "vibration",
            SensorKind::Motion => "motion",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        use crate::constants::sensors::{MOTION_UNIT, TEMP_UNIT, VIBRATION_UNIT};

        match self {
            SensorKind::Temperature => TEMP_UNIT,
            SensorKind::Vibration => VIBRATION_UNIT,
            SensorKind::Motion => MOTION_UNIT,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sensor found in alert during one evaluation pass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    /// Sensor that raised the alert
    pub sensor_id: String,
    /// Variant of that sensor
    pub kind: SensorKind,
    /// Window average at evaluation time
    pub average: f64,
}

impl Alert {
    /// Text delivered to notifiers
    pub fn message(&self) -> String {
        alloc::format!("{}", self)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALERT Sensor {} at threshold (avg={:.2})",
            self.sensor_id, self.average
        )
    }
}
