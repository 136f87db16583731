//! Notification Channels for EdgeWatch Alerts
//!
//! ## Overview
//!
//! This crate provides the notifiers the alert manager fans messages out to.
//! Each one implements [`edgewatch_core::Notifier`] and writes a single line
//! per message to its output: stdout by default, or any `std::io::Write`.
//! Nothing here opens a socket or talks to a mail server; the line stands in
//! for the real dispatch.
//!
//! ## Channels
//!
//! ### Email
//!
//! One line per message, addressed to a recipient:
//! ```text
//! [EMAIL to ops@example.com] ALERT Sensor T1 at threshold (avg=116.67)
//! ```
//!
//! ### Webhook
//!
//! The message is wrapped in a JSON body, the way chat webhooks expect it:
//! ```text
//! [WEBHOOK https://hooks.example.com/alerts] {"text":"ALERT Sensor T1 at threshold (avg=116.67)"}
//! ```
//!
//! ## Delivery Semantics
//!
//! Fire-and-forget: no retries, no acknowledgement. A failed write is
//! counted in [`DeliveryStats`] and surfaced as
//! [`NotifyError::DeliveryFailed`](edgewatch_core::NotifyError::DeliveryFailed)
//! so the alert manager can log it and move on.
//!
//! ## Example Usage
//!
//! ```rust
//! use edgewatch_connectors::{EmailConfig, EmailNotifier, WebhookConfig, WebhookNotifier};
//! use edgewatch_core::AlertManager;
//!
//! let email = EmailNotifier::new(EmailConfig::new("ops@example.com"))?;
//! let webhook = WebhookNotifier::new(
//!     WebhookConfig::new("https://hooks.example.com/alerts").field("source", "edge-01"),
//! )?;
//!
//! let mut manager = AlertManager::new();
//! manager.add_notifier(Box::new(email));
//! manager.add_notifier(Box::new(webhook));
//! # Ok::<(), edgewatch_connectors::ConnectorError>(())
//! ```

pub mod email;
pub mod webhook;

mod sink;

pub use email::{EmailConfig, EmailNotifier};
pub use webhook::{WebhookConfig, WebhookNotifier};

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Invalid recipient, URL or other setting
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payload could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Delivery statistics common to all notifiers
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeliveryStats {
    /// Total messages written successfully
    pub messages_sent: u64,
    /// Total messages that failed to write
    pub messages_failed: u64,
    /// Total bytes written, including line terminators
    pub bytes_sent: u64,
    /// Last error message
    pub last_error: Option<String>,
}
