//! Sensor Monitoring Demo
//!
//! Feeds a fixed set of readings into three sensors, evaluates alerts once
//! and checks the motion-driven lights once.
//!
//! ## What You'll Learn
//!
//! - Sharing sensors between the alert manager and the light controller
//! - Wiring email and webhook notifiers into the alert manager
//! - Reading the light controller's effects
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_monitoring_demo
//! ```

use std::rc::Rc;

use edgewatch_connectors::{EmailConfig, EmailNotifier, WebhookConfig, WebhookNotifier};
use edgewatch_core::{
    shared, AlertManager, LightController, LightTransition, MotionSensor, Sensor,
    TemperatureSensor, VibrationSensor,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("EdgeWatch Sensor Monitoring Demo");
    println!("================================");

    let temp = shared(TemperatureSensor::new("T1"));
    let vib = shared(VibrationSensor::new("V1"));
    let motion = shared(MotionSensor::new("M1"));

    let email = EmailNotifier::new(EmailConfig::new("example@example.com"))?;
    let webhook = WebhookNotifier::new(WebhookConfig::new("http://webhook.com"))?;

    let mut manager = AlertManager::new();
    manager.add_sensor(Rc::clone(&temp));
    manager.add_sensor(Rc::clone(&vib));
    manager.add_sensor(Rc::clone(&motion));
    manager.add_notifier(Box::new(email));
    manager.add_notifier(Box::new(webhook));

    let mut lights = LightController::new(Rc::clone(&motion));

    println!("\nAdding temperature readings...");
    for value in [90.0, 104.0, 156.0] {
        let mut sensor = temp.borrow_mut();
        sensor.record(value)?;
        let unit = sensor.unit();
        println!(" Reading T: {}{} -> Average: {:.2}{}", value, unit, sensor.average(), unit);
    }

    println!("\nAdding vibration readings...");
    for value in [0.5, 1.0, 2.0] {
        let mut sensor = vib.borrow_mut();
        sensor.record(value)?;
        println!(" Reading V: {} -> Average: {:.2}", value, sensor.average());
    }

    println!("\nAdding motion readings...");
    for value in [0.0, 1.0, 0.2, 1.5] {
        let mut sensor = motion.borrow_mut();
        sensor.record(value)?;
        println!(" Reading M: {} -> Average: {:.2}", value, sensor.average());
    }

    println!("\nEvaluating alerts");
    let report = manager.evaluate_and_notify();
    for failure in &report.failures {
        println!(" Delivery failed for {}: {}", failure.sensor_id, failure.error);
    }

    println!("\nLight controller");
    let check = lights.check();
    match check.transition {
        Some(LightTransition::TurnedOn) => println!("LIGHTS ON"),
        Some(LightTransition::TurnedOff) => println!("LIGHTS OFF"),
        None => {}
    }
    if check.insufficient_movement {
        println!("Not enough movement detected");
    }

    Ok(())
}
