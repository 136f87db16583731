//! Core monitoring engine for EdgeWatch
//!
//! Sensors keep a sliding window of calibrated readings and decide for
//! themselves when they are alarming. The alert manager fans alert messages
//! out to notifiers; the light controller follows one motion sensor.
//!
//! Key constraints:
//! - Single-threaded, synchronous evaluation
//! - No heap allocation when recording a reading
//! - Builds without `std` (needs `alloc`)
//!
//! ```
//! use edgewatch_core::{shared, AlertManager, MemoryNotifier, Sensor, TemperatureSensor};
//!
//! let temp = shared(TemperatureSensor::new("T1"));
//! for value in [90.0, 104.0, 156.0] {
//!     temp.borrow_mut().record(value)?;
//! }
//!
//! let notifier = MemoryNotifier::new();
//! let log = notifier.log();
//!
//! let mut manager = AlertManager::new();
//! manager.add_sensor(temp.clone());
//! manager.add_notifier(Box::new(notifier));
//!
//! let report = manager.evaluate_and_notify();
//! assert_eq!(report.alerts.len(), 1);
//! assert_eq!(log.borrow()[0], "ALERT Sensor T1 at threshold (avg=116.67)");
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod alerts;
pub mod buffer;
pub mod constants;
pub mod errors;
pub mod events;
pub mod lighting;
pub mod notify;
pub mod sensors;
pub mod stats;
pub mod traits;

// Public API
pub use alerts::{AlertManager, DeliveryFailure, EvaluationReport};
pub use errors::{NotifyError, NotifyResult, SensorError, SensorResult};
pub use events::{Alert, SensorKind};
pub use lighting::{LightCheck, LightController, LightState, LightTransition};
pub use notify::MemoryNotifier;
pub use sensors::{
    shared,
    MotionSensor,
    SensorConfig,
    Shared,
    TemperatureSensor,
    VibrationSensor,
};
pub use traits::{Notifier, Sensor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
