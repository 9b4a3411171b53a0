//! Settings for one pipeline, fixed at startup.

use crate::classify::Classifier;
use crate::error::Result;
use crate::extract::{ThreadIdExtractor, TimestampExtractor, TimestampFormat, DEFAULT_STALE_AFTER};
use crate::processor::LineProcessor;
use crate::sink::{SyslogSink, DEFAULT_FACILITY, DEFAULT_TAG};
use std::time::Duration;
use syslog::Facility;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub timestamp_format: TimestampFormat,
    /// Timestamps further than this from now are kept in the message.
    pub stale_after: Duration,
    /// Syslog tag.
    pub tag: String,
    pub facility: Facility,
    /// `host:port` of a remote syslog collector; local socket when `None`.
    pub remote: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            stale_after: DEFAULT_STALE_AFTER,
            tag: DEFAULT_TAG.to_string(),
            facility: DEFAULT_FACILITY,
            remote: None,
        }
    }
}

impl PipelineConfig {
    /// Compile the built-in rules and extractors.
    pub fn line_processor(&self) -> Result<LineProcessor> {
        Ok(LineProcessor::new(
            Classifier::domino()?,
            ThreadIdExtractor::new()?,
            TimestampExtractor::new(self.timestamp_format, self.stale_after)?,
        ))
    }

    /// Open the syslog connection. Failure here is fatal to the run.
    pub fn connect_sink(&self) -> Result<SyslogSink> {
        SyslogSink::connect(&self.tag, self.facility, self.remote.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.timestamp_format, TimestampFormat::Us);
        assert_eq!(config.stale_after, Duration::from_secs(5400));
        assert_eq!(config.tag, "domino");
        assert!(matches!(config.facility, Facility::LOG_NEWS));
        assert!(config.remote.is_none());
    }

    #[test]
    fn test_line_processor_uses_settings() {
        let config = PipelineConfig {
            timestamp_format: TimestampFormat::Iso,
            stale_after: Duration::from_secs(2),
            ..PipelineConfig::default()
        };
        let processor = config.line_processor().expect("processor");
        let record = processor
            .render(b"2006/01/02 03:04:05 PM Corrupt Data Exception")
            .expect("record");
        assert_eq!(record.message, "Corrupt Data Exception (@ 2006/01/02 03:04:05 PM)");
    }
}
