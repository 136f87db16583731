//! End-to-end scenarios across sensors, alert manager and light controller

use std::cell::RefCell;
use std::rc::Rc;

use edgewatch_core::{
    shared, AlertManager, LightController, LightState, LightTransition, MotionSensor,
    Notifier, NotifyError, NotifyResult, Sensor, TemperatureSensor, VibrationSensor,
};

/// Records every send and can be told to fail
struct RecordingNotifier {
    sent: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (Self { sent: Rc::clone(&sent), fail: false }, sent)
    }

    fn failing() -> Self {
        Self { sent: Rc::default(), fail: true }
    }
}

impl Notifier for RecordingNotifier {
    fn channel(&self) -> &'static str {
        "recording"
    }

    fn send(&mut self, message: &str) -> NotifyResult<()> {
        if self.fail {
            return Err(NotifyError::ChannelUnavailable { channel: self.channel() });
        }
        self.sent.borrow_mut().push(message.to_string());
        Ok(())
    }
}

#[test]
fn two_alerting_sensors_two_notifiers_four_sends() {
    let temp = shared(TemperatureSensor::new("T1"));
    let vib = shared(VibrationSensor::new("V1"));
    let quiet = shared(MotionSensor::new("M1"));

    for v in [90.0, 104.0, 156.0] {
        temp.borrow_mut().record(v).unwrap();
    }
    for v in [3.0, 3.0] {
        vib.borrow_mut().record(v).unwrap();
    }
    quiet.borrow_mut().record(0.5).unwrap();

    let (email, email_log) = RecordingNotifier::new();
    let (hook, hook_log) = RecordingNotifier::new();

    let mut manager = AlertManager::new();
    manager.add_sensor(temp);
    manager.add_sensor(vib);
    manager.add_sensor(quiet);
    manager.add_notifier(Box::new(email));
    manager.add_notifier(Box::new(hook));

    let report = manager.evaluate_and_notify();

    assert_eq!(report.deliveries, 4);
    assert!(report.is_clean());

    let ids: Vec<&str> = report.alerts.iter().map(|a| a.sensor_id.as_str()).collect();
    assert_eq!(ids, ["T1", "V1"]);

    for log in [email_log, hook_log] {
        let log = log.borrow();
        assert_eq!(
            log.as_slice(),
            [
                "ALERT Sensor T1 at threshold (avg=116.67)",
                "ALERT Sensor V1 at threshold (avg=3.00)",
            ]
        );
    }
}

#[test]
fn failing_channel_is_reported_and_skipped() {
    let temp = shared(TemperatureSensor::new("T1"));
    temp.borrow_mut().record(95.0).unwrap();

    let (healthy, healthy_log) = RecordingNotifier::new();

    let mut manager = AlertManager::new();
    manager.add_sensor(temp);
    manager.add_notifier(Box::new(RecordingNotifier::failing()));
    manager.add_notifier(Box::new(healthy));

    let report = manager.evaluate_and_notify();

    assert_eq!(report.deliveries, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].error.channel(), "recording");
    assert_eq!(healthy_log.borrow().len(), 1);
}

#[test]
fn demo_readings_match_reference_run() {
    let temp = shared(TemperatureSensor::new("T1"));
    let vib = shared(VibrationSensor::new("V1"));
    let motion = shared(MotionSensor::new("M1"));

    for v in [90.0, 104.0, 156.0] {
        temp.borrow_mut().record(v).unwrap();
    }
    for v in [0.5, 1.0, 2.0] {
        vib.borrow_mut().record(v).unwrap();
    }
    for v in [0.0, 1.0, 0.2, 1.5] {
        motion.borrow_mut().record(v).unwrap();
    }

    let (notifier, log) = RecordingNotifier::new();
    let mut manager = AlertManager::new();
    manager.add_sensor(Rc::clone(&temp));
    manager.add_sensor(Rc::clone(&vib));
    manager.add_sensor(Rc::clone(&motion));
    manager.add_notifier(Box::new(notifier));

    let report = manager.evaluate_and_notify();

    // Only the temperature sensor is alarming
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(log.borrow()[0], "ALERT Sensor T1 at threshold (avg=116.67)");

    let mut lights = LightController::new(motion);
    let check = lights.check();
    assert_eq!(check.state, LightState::Off);
    assert!(check.insufficient_movement);
}

#[test]
fn light_controller_shares_sensor_with_manager() {
    let motion = shared(MotionSensor::new("M1"));

    let mut manager = AlertManager::new();
    manager.add_sensor(Rc::clone(&motion));
    let mut lights = LightController::new(Rc::clone(&motion));

    assert!(lights.check().insufficient_movement);

    motion.borrow_mut().record(0.0).unwrap();
    motion.borrow_mut().record(2.5).unwrap();

    assert_eq!(manager.evaluate_and_notify().alerts.len(), 1);

    let on = lights.check();
    let again = lights.check();
    assert_eq!(on.transition, Some(LightTransition::TurnedOn));
    assert_eq!(again.transition, None);
    assert!(lights.lights_on());
}
