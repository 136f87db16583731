//! Webhook Notifier
//!
//! ## Overview
//!
//! Chat and incident tools accept alerts as a small JSON document posted to
//! a webhook URL. This notifier renders that document and writes it next to
//! the target URL, one line per alert:
//!
//! ```text
//! [WEBHOOK https://hooks.example.com/alerts] {"text":"ALERT Sensor T1 at threshold (avg=116.67)"}
//! ```
//!
//! ## Payload
//!
//! The body always carries the alert text under `"text"`. Static fields
//! added with [`WebhookConfig::field`] are merged in at the top level, which
//! covers routing keys such as a channel name or a device tag:
//!
//! ```rust
//! use edgewatch_connectors::{WebhookConfig, WebhookNotifier};
//!
//! let webhook = WebhookNotifier::new(
//!     WebhookConfig::new("https://hooks.example.com/alerts").field("device", "edge-01"),
//! )?;
//!
//! let body = webhook.payload("ALERT Sensor T1 at threshold (avg=116.67)")?;
//! assert_eq!(
//!     body,
//!     r#"{"device":"edge-01","text":"ALERT Sensor T1 at threshold (avg=116.67)"}"#
//! );
//! # Ok::<(), edgewatch_connectors::ConnectorError>(())
//! ```
//!
//! Extra fields come first in key order, followed by `text`, so output is
//! stable across runs.

use std::collections::BTreeMap;
use std::io::Write;

use edgewatch_core::{Notifier, NotifyError, NotifyResult};
use serde::Serialize;

use crate::{sink::LineSink, ConnectorError, DeliveryStats};

/// Webhook configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookConfig {
    /// Target URL
    pub url: String,
    /// Extra static fields merged into every payload
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl WebhookConfig {
    /// Create new configuration with target URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a static payload field
    ///
    /// A field named `text` is ignored; the alert message always wins.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    #[serde(flatten)]
    fields: BTreeMap<&'a str, &'a serde_json::Value>,
    text: &'a str,
}

/// Notifier that writes alert messages as webhook JSON bodies
#[derive(Debug)]
pub struct WebhookNotifier {
    config: WebhookConfig,
    sink: LineSink,
}

impl WebhookNotifier {
    /// Create notifier writing to stdout
    pub fn new(config: WebhookConfig) -> Result<Self, ConnectorError> {
        // Validate URL
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(ConnectorError::Config(
                "Webhook URL must start with http:// or https://".into(),
            ));
        }

        Ok(Self {
            config,
            sink: LineSink::stdout(),
        })
    }

    /// Redirect output to any writer
    pub fn with_writer<W: Write + 'static>(mut self, out: W) -> Self {
        self.sink = LineSink::new(out);
        self
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Delivery counters
    pub fn stats(&self) -> &DeliveryStats {
        self.sink.stats()
    }

    /// JSON body for `message`
    pub fn payload(&self, message: &str) -> Result<String, ConnectorError> {
        let fields = self
            .config
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != "text")
            .map(|(key, value)| (key.as_str(), value))
            .collect();

        serde_json::to_string(&Payload { fields, text: message })
            .map_err(|e| ConnectorError::Serialization(e.to_string()))
    }
}

impl Notifier for WebhookNotifier {
    fn channel(&self) -> &'static str {
        "webhook"
    }

    fn send(&mut self, message: &str) -> NotifyResult<()> {
        let body = self.payload(message).map_err(|e| NotifyError::DeliveryFailed {
            channel: self.channel(),
            reason: e.to_string(),
        })?;

        log::debug!("webhook {}: {}", self.config.url, body);
        let line = format!("[WEBHOOK {}] {}", self.config.url, body);
        let channel = self.channel();
        self.sink.write_line(channel, &line)
    }
}
