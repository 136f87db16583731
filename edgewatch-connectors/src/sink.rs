//! Line-oriented output shared by all notifiers

use std::fmt;
use std::io::{self, Write};

use edgewatch_core::{NotifyError, NotifyResult};

use crate::DeliveryStats;

/// Writer plus the delivery counters for one notifier
pub(crate) struct LineSink {
    out: Box<dyn Write>,
    stats: DeliveryStats,
}

impl LineSink {
    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub(crate) fn new<W: Write + 'static>(out: W) -> Self {
        Self {
            out: Box::new(out),
            stats: DeliveryStats::default(),
        }
    }

    /// Write one line and flush, updating the counters
    pub(crate) fn write_line(&mut self, channel: &'static str, line: &str) -> NotifyResult<()> {
        let result = writeln!(self.out, "{}", line).and_then(|()| self.out.flush());

        match result {
            Ok(()) => {
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += line.len() as u64 + 1;
                Ok(())
            }
            Err(e) => {
                log::warn!("{} write failed: {}", channel, e);
                self.stats.messages_failed += 1;
                self.stats.last_error = Some(e.to_string());
                Err(NotifyError::DeliveryFailed {
                    channel,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub(crate) fn stats(&self) -> &DeliveryStats {
        &self.stats
    }
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
