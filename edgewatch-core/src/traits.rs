//! Core traits for sensors and notifiers
//!
//! These traits define the seams of the crate: anything that can hold a
//! reading window and decide whether it is alarming is a [`Sensor`], and
//! anything that can deliver a line of text is a [`Notifier`].
//! Keep them simple - the alert manager only needs these few methods.

use crate::{
    errors::{NotifyResult, SensorResult},
    events::SensorKind,
    sensors::SensorCore,
};

/// Core sensor trait - implement this for each sensor variant
///
/// Variants embed a [`SensorCore`] for the shared windowed state and only
/// supply their kind and alert predicate. Everything else has a default
/// that delegates to the core.
pub trait Sensor {
    /// Shared windowed state
    fn core(&self) -> &SensorCore;

    /// Shared windowed state, mutably
    fn core_mut(&mut self) -> &mut SensorCore;

    /// Which variant this is
    fn kind(&self) -> SensorKind;

    /// Variant-specific alert predicate over the current window
    fn is_in_alert(&self) -> bool;

    /// Unit label for readings
    fn unit(&self) -> &'static str {
        self.kind().unit()
    }

    /// Sensor identifier
    fn id(&self) -> &str {
        self.core().id()
    }

    /// Record a raw reading (calibration is applied before storage)
    fn record(&mut self, value: f64) -> SensorResult<()> {
        self.core_mut().record(value)
    }

    /// Mean of the current window, `0.0` when empty
    fn average(&self) -> f64 {
        self.core().average()
    }

    /// Number of readings in the window
    fn len(&self) -> usize {
        self.core().len()
    }

    /// Check if no readings have been recorded yet
    fn is_empty(&self) -> bool {
        self.core().is_empty()
    }
}

/// Delivery channel for alert messages
///
/// Delivery is fire-and-forget: no retries, no acknowledgement. An `Err`
/// only means the message could not be handed to the channel.
pub trait Notifier {
    /// Short channel label used in logs and failure reports
    fn channel(&self) -> &'static str;

    /// Deliver one message
    fn send(&mut self, message: &str) -> NotifyResult<()>;
}
