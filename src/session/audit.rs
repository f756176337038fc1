//! Per-round audit records.

use core::fmt;

/// One audit line: the session state after a round settled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuditRecord {
    /// Zero-based index of the session iteration, sit-outs included.
    pub hand_index: usize,
    /// Bankroll after settlement.
    pub balance: f64,
    /// Running count after the round's cards were counted.
    pub running_count: i32,
    /// True count after the round.
    pub true_count: f64,
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hand={} balance={} running_count={} true_count={:.4}",
            self.hand_index, self.balance, self.running_count, self.true_count
        )
    }
}

#[cfg(feature = "std")]
pub use writer::AuditLog;

#[cfg(feature = "std")]
mod writer {
    use std::io::Write;

    use crate::event::{Event, EventSink};
    use crate::sync::Mutex;

    /// Appends one line per [`Event::Audit`] to a writer and ignores every
    /// other event.
    ///
    /// Write failures are logged and dropped; auditing never stops play.
    pub struct AuditLog<W> {
        writer: Mutex<W>,
    }

    impl<W: Write + Send> AuditLog<W> {
        /// Wraps a writer, typically a file opened for append.
        pub const fn new(writer: W) -> Self {
            Self {
                writer: Mutex::new(writer),
            }
        }

        /// Returns the underlying writer.
        pub fn into_inner(self) -> W {
            self.writer.into_inner()
        }
    }

    impl<W: Write + Send> EventSink for AuditLog<W> {
        fn emit(&self, event: &Event) {
            let Event::Audit(record) = event else {
                return;
            };
            let mut writer = self.writer.lock();
            if let Err(error) = writeln!(writer, "{record}") {
                tracing::warn!(%error, hand = record.hand_index, "failed to write audit line");
            }
        }
    }
}
