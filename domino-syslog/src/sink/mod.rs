//! Destinations for classified messages.
//!
//! The pipeline only needs something that accepts a severity and a message;
//! [`LogSink`] is that seam. [`SyslogSink`] is the production implementation.

mod syslog_sink;

use crate::error::SinkError;
use crate::severity::Severity;

pub use syslog_sink::{parse_facility, SyslogSink, DEFAULT_FACILITY, DEFAULT_TAG};

/// Receives classified messages.
///
/// A sink has a single owner, the stream driver, so `emit` takes `&mut self`
/// and implementations need no locking.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send {
    /// Write one message at the given severity.
    fn emit(&mut self, severity: Severity, message: &str) -> Result<(), SinkError>;
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&mut self, severity: Severity, message: &str) -> Result<(), SinkError> {
        (**self).emit(severity, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_boxed_sink_forwards() {
        let mut mock = MockLogSink::new();
        mock.expect_emit()
            .with(eq(Severity::Warning), eq("disk low"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut boxed: Box<dyn LogSink> = Box::new(mock);
        assert!(boxed.emit(Severity::Warning, "disk low").is_ok());
    }

    #[test]
    fn test_boxed_sink_returns_errors() {
        let mut mock = MockLogSink::new();
        mock.expect_emit()
            .times(1)
            .returning(|_, _| Err(SinkError("socket closed".to_string())));

        let mut boxed: Box<dyn LogSink> = Box::new(mock);
        assert_eq!(
            boxed.emit(Severity::Critical, "down"),
            Err(SinkError("socket closed".to_string()))
        );
    }
}
