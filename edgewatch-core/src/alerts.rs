//! Alert Evaluation and Fan-Out
//!
//! ## Overview
//!
//! The [`AlertManager`] ties detection to delivery. Sensors decide whether
//! they are alarming; notifiers decide how a message leaves the device. The
//! manager knows neither detail, it only walks both lists:
//!
//! ```text
//! for sensor in sensors (registration order):
//!     if sensor.is_in_alert():
//!         message = "ALERT Sensor {id} at threshold (avg={average:.2})"
//!         for notifier in notifiers (registration order):
//!             notifier.send(message)
//! ```
//!
//! ## Delivery Semantics
//!
//! - **No deduplication**: every pass re-sends for every alerting sensor.
//! - **No batching or rate limiting**: one message per sensor per notifier.
//! - **Failures don't stop the pass**: a failed send is logged and recorded
//!   in the [`EvaluationReport`], then the remaining notifiers and sensors
//!   are still processed.
//!
//! ## Usage Example
//!
//! ```rust
//! use edgewatch_core::{shared, AlertManager, MemoryNotifier, Sensor, VibrationSensor};
//!
//! let vib = shared(VibrationSensor::new("V1"));
//! vib.borrow_mut().record(3.0)?;
//!
//! let mut manager = AlertManager::new();
//! manager.add_sensor(vib);
//! manager.add_notifier(Box::new(MemoryNotifier::new()));
//!
//! let report = manager.evaluate_and_notify();
//! assert_eq!(report.deliveries, 1);
//! assert!(report.is_clean());
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{
    errors::NotifyError,
    events::Alert,
    traits::{Notifier, Sensor},
};

/// One failed delivery during an evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryFailure {
    /// Sensor whose alert was being delivered
    pub sensor_id: String,
    /// Why the notifier refused it
    pub error: NotifyError,
}

/// Outcome of one [`AlertManager::evaluate_and_notify`] pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    /// Alerts raised, in sensor registration order
    pub alerts: Vec<Alert>,
    /// Successful sends across all notifiers
    pub deliveries: usize,
    /// Failed sends
    pub failures: Vec<DeliveryFailure>,
    /// Sensors left out because the caller held them mutably borrowed
    pub skipped: usize,
}

impl EvaluationReport {
    /// Check if every send succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluates sensors and fans alert messages out to notifiers
///
/// Sensors are shared with the caller; notifiers are owned.
#[derive(Default)]
pub struct AlertManager {
    sensors: Vec<Rc<RefCell<dyn Sensor>>>,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl AlertManager {
    /// Manager with no sensors and no notifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager over existing sensor and notifier lists
    pub fn with_parts(
        sensors: Vec<Rc<RefCell<dyn Sensor>>>,
        notifiers: Vec<Box<dyn Notifier>>,
    ) -> Self {
        Self { sensors, notifiers }
    }

    /// Register a sensor; evaluation follows registration order
    pub fn add_sensor<S: Sensor + 'static>(&mut self, sensor: Rc<RefCell<S>>) {
        let sensor: Rc<RefCell<dyn Sensor>> = sensor;
        self.sensors.push(sensor);
    }

    /// Register a notifier; delivery follows registration order
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered sensors
    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Number of registered notifiers
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Check every sensor and send one message per alerting sensor to every
    /// notifier
    ///
    /// A sensor the caller still holds through `borrow_mut()` is skipped for
    /// this pass and counted in [`EvaluationReport::skipped`].
    pub fn evaluate_and_notify(&mut self) -> EvaluationReport {
        let mut report = EvaluationReport::default();

        for sensor in &self.sensors {
            let alert = {
                let Ok(sensor) = sensor.try_borrow() else {
                    log_warn!("sensor mutably borrowed during evaluation, skipped");
                    report.skipped += 1;
                    continue;
                };
                if !sensor.is_in_alert() {
                    continue;
                }
                Alert {
                    sensor_id: sensor.id().into(),
                    kind: sensor.kind(),
                    average: sensor.average(),
                }
            };

            let message = alert.message();
            log_info!("{} ({})", message, alert.kind);

            for notifier in self.notifiers.iter_mut() {
                match notifier.send(&message) {
                    Ok(()) => report.deliveries += 1,
                    Err(error) => {
                        log_warn!(
                            "alert for sensor {} not delivered via {}: {}",
                            alert.sensor_id,
                            notifier.channel(),
                            error
                        );
                        report.failures.push(DeliveryFailure {
                            sensor_id: alert.sensor_id.clone(),
                            error,
                        });
                    }
                }
            }

            report.alerts.push(alert);
        }

        report
    }
}
