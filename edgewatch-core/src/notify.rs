//! In-Memory Notifier
//!
//! Captures every delivered message in a shared log instead of sending it
//! anywhere. Useful when embedding the alert manager in a host that drains
//! messages itself, and for tests.
//!
//! ```rust
//! use edgewatch_core::{MemoryNotifier, Notifier};
//!
//! let mut notifier = MemoryNotifier::new();
//! let log = notifier.log();
//!
//! notifier.send("hello")?;
//! assert_eq!(log.borrow().as_slice(), ["hello"]);
//! # Ok::<(), edgewatch_core::NotifyError>(())
//! ```

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{
    errors::{NotifyError, NotifyResult},
    traits::Notifier,
};

/// Shared message log written by a [`MemoryNotifier`]
pub type MessageLog = Rc<RefCell<Vec<String>>>;

/// Notifier that appends messages to a shared in-memory log
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    log: MessageLog,
    capacity: Option<usize>,
}

impl MemoryNotifier {
    /// Unbounded notifier with a fresh log
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that refuses messages once `capacity` are stored
    pub fn bounded(capacity: usize) -> Self {
        Self {
            log: MessageLog::default(),
            capacity: Some(capacity),
        }
    }

    /// Handle to the message log; stays valid after the notifier is moved
    pub fn log(&self) -> MessageLog {
        Rc::clone(&self.log)
    }
}

impl Notifier for MemoryNotifier {
    fn channel(&self) -> &'static str {
        "memory"
    }

    fn send(&mut self, message: &str) -> NotifyResult<()> {
        let mut log = self.log.borrow_mut();

        if let Some(capacity) = self.capacity {
            if log.len() >= capacity {
                return Err(NotifyError::DeliveryFailed {
                    channel: self.channel(),
                    reason: "log full".to_string(),
                });
            }
        }

        log.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_order() {
        let mut notifier = MemoryNotifier::new();
        let log = notifier.log();

        notifier.send("a").unwrap();
        notifier.send("b").unwrap();

        assert_eq!(log.borrow().as_slice(), ["a", "b"]);
    }

    #[test]
    fn bounded_log_rejects_overflow() {
        let mut notifier = MemoryNotifier::bounded(1);

        assert!(notifier.send("first").is_ok());
        let err = notifier.send("second").unwrap_err();

        assert_eq!(err.channel(), "memory");
        assert_eq!(notifier.log().borrow().len(), 1);
    }
}
