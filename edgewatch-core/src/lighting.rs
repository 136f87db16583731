//! Motion-Driven Light Controller
//!
//! A two-state machine that follows one motion sensor:
//!
//! ```text
//!              motion in alert
//!   ┌─────┐ ──────────────────▶ ┌────┐
//!   │ Off │                     │ On │
//!   └─────┘ ◀────────────────── └────┘
//!              no motion alert
//! ```
//!
//! [`LightController::check`] is level-triggered: each call reads the sensor
//! once and moves to the matching state. The transition effect
//! ([`LightTransition`]) only fires on an actual edge, so two calls in a row
//! with the sensor still alarming turn the lights on once. The off path also
//! reports "insufficient movement" on *every* call that ends in `Off`,
//! whether or not the lights were already off.
//!
//! ```rust
//! use edgewatch_core::{shared, LightController, LightTransition, MotionSensor, Sensor};
//!
//! let motion = shared(MotionSensor::new("M1"));
//! let mut lights = LightController::new(motion.clone());
//!
//! motion.borrow_mut().record(0.0)?;
//! motion.borrow_mut().record(3.0)?;
//!
//! assert_eq!(lights.check().transition, Some(LightTransition::TurnedOn));
//! assert_eq!(lights.check().transition, None);
//! assert!(lights.lights_on());
//! # Ok::<(), edgewatch_core::SensorError>(())
//! ```

use crate::{
    sensors::{MotionSensor, Shared},
    traits::Sensor,
};

/// Light state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    /// Lights off (initial state)
    #[default]
    Off,
    /// Lights on
    On,
}

/// Edge taken during a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightTransition {
    /// Off → On
    TurnedOn,
    /// On → Off
    TurnedOff,
}

/// Effects of one [`LightController::check`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCheck {
    /// State after the check
    pub state: LightState,
    /// Edge taken, if the state changed
    pub transition: Option<LightTransition>,
    /// Set on every check that ends with the lights off
    pub insufficient_movement: bool,
}

/// Switches a light flag from a shared motion sensor
#[derive(Debug)]
pub struct LightController {
    sensor: Shared<MotionSensor>,
    state: LightState,
}

impl LightController {
    /// Controller bound to `sensor`, lights off
    pub fn new(sensor: Shared<MotionSensor>) -> Self {
        Self {
            sensor,
            state: LightState::Off,
        }
    }

    /// Read the motion sensor once and move to the matching state
    ///
    /// If the caller still holds the sensor through `borrow_mut()`, the check
    /// is skipped: the state stays as it was and no effect is reported.
    pub fn check(&mut self) -> LightCheck {
        let Ok(sensor) = self.sensor.try_borrow() else {
            log_warn!("motion sensor mutably borrowed, light check skipped");
            return LightCheck {
                state: self.state,
                transition: None,
                insufficient_movement: false,
            };
        };

        if sensor.is_in_alert() {
            let transition = turn_on(&mut self.state);
            if transition.is_some() {
                log_info!("sensor {}: lights on", sensor.id());
            }

            LightCheck {
                state: self.state,
                transition,
                insufficient_movement: false,
            }
        } else {
            let transition = turn_off(&mut self.state);
            if transition.is_some() {
                log_info!("sensor {}: lights off", sensor.id());
            }
            log_info!("sensor {}: insufficient movement detected", sensor.id());

            LightCheck {
                state: self.state,
                transition,
                insufficient_movement: true,
            }
        }
    }

    /// State as of the last check
    pub fn state(&self) -> LightState {
        self.state
    }

    /// Check if the lights are on as of the last check
    pub fn lights_on(&self) -> bool {
        self.state == LightState::On
    }
}

fn turn_on(state: &mut LightState) -> Option<LightTransition> {
    match *state {
        LightState::On => None,
        LightState::Off => {
            *state = LightState::On;
            Some(LightTransition::TurnedOn)
        }
    }
}

fn turn_off(state: &mut LightState) -> Option<LightTransition> {
    match *state {
        LightState::Off => None,
        LightState::On => {
            *state = LightState::Off;
            Some(LightTransition::TurnedOff)
        }
    }
}
