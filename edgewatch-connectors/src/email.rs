//! Email Notifier
//!
//! Writes one addressed line per alert. The line format mirrors what an
//! outgoing mail log would show:
//!
//! ```text
//! [EMAIL to ops@example.com] ALERT Sensor T1 at threshold (avg=116.67)
//! ```
//!
//! An optional subject prefix is prepended to the message body, e.g.
//! `[EdgeWatch] ALERT Sensor ...`, for inbox filtering.

use std::io::Write;

use edgewatch_core::{Notifier, NotifyResult};

use crate::{sink::LineSink, ConnectorError, DeliveryStats};

/// Email configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    /// Recipient address
    pub recipient: String,
    /// Prepended to every message, separated by a space
    pub subject_prefix: Option<String>,
}

impl EmailConfig {
    /// Create new configuration for a recipient
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject_prefix: None,
        }
    }

    /// Set subject prefix
    pub fn subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = Some(prefix.into());
        self
    }

    fn validate(&self) -> Result<(), ConnectorError> {
        match self.recipient.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ConnectorError::Config(format!(
                "invalid email recipient: {:?}",
                self.recipient
            ))),
        }
    }
}

/// Notifier that writes alert messages as addressed email lines
#[derive(Debug)]
pub struct EmailNotifier {
    config: EmailConfig,
    sink: LineSink,
}

impl EmailNotifier {
    /// Create notifier writing to stdout
    pub fn new(config: EmailConfig) -> Result<Self, ConnectorError> {
        config.validate()?;

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

    /// Recipient address
    pub fn recipient(&self) -> &str {
        &self.config.recipient
    }

    /// Delivery counters
    pub fn stats(&self) -> &DeliveryStats {
        self.sink.stats()
    }

    /// Line written for `message`
    pub fn render(&self, message: &str) -> String {
        match &self.config.subject_prefix {
            Some(prefix) => format!("[EMAIL to {}] {} {}", self.config.recipient, prefix, message),
            None => format!("[EMAIL to {}] {}", self.config.recipient, message),
        }
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn send(&mut self, message: &str) -> NotifyResult<()> {
        let line = self.render(message);
        log::debug!("email to {}: {}", self.config.recipient, message);
        let channel = self.channel();
        self.sink.write_line(channel, &line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EmailConfig::new("ops@example.com").subject_prefix("[EdgeWatch]");

        assert_eq!(config.recipient, "ops@example.com");
        assert_eq!(config.subject_prefix.as_deref(), Some("[EdgeWatch]"));
    }

    #[test]
    fn test_recipient_validation() {
        assert!(EmailNotifier::new(EmailConfig::new("not-an-address")).is_err());
        assert!(EmailNotifier::new(EmailConfig::new("@example.com")).is_err());
        assert!(EmailNotifier::new(EmailConfig::new("ops@")).is_err());
        assert!(EmailNotifier::new(EmailConfig::new("a@b@c")).is_err());
        assert!(EmailNotifier::new(EmailConfig::new("ops@example.com")).is_ok());
    }

    #[test]
    fn test_render() {
        let plain = EmailNotifier::new(EmailConfig::new("a@b.c")).unwrap();
        assert_eq!(plain.render("hi"), "[EMAIL to a@b.c] hi");

        let prefixed =
            EmailNotifier::new(EmailConfig::new("a@b.c").subject_prefix("[EW]")).unwrap();
        assert_eq!(prefixed.render("hi"), "[EMAIL to a@b.c] [EW] hi");
    }
}
