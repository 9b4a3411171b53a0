#![forbid(unsafe_code)]

//! Forward a Domino server's console output to syslog.
//!
//! The server is started as a child process. Every line it prints is echoed
//! to our stdout unchanged and, after the thread id and timestamp prefixes
//! are stripped and the Latin-1 text converted, sent to syslog at a severity
//! picked by a fixed rule table.

pub mod classify;
pub mod config;
pub mod encoding;
mod error;
pub mod extract;
pub mod processor;
pub mod severity;
pub mod sink;
pub mod stream;
pub mod supervisor;

pub use crate::error::{Error, Result, SinkError};

///
/// Everything needed to wire up a run
///
/// ```
/// use domino_syslog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::{Classifier, Rule};
    pub use crate::config::PipelineConfig;
    pub use crate::extract::{TimestampFormat, DEFAULT_STALE_AFTER};
    pub use crate::processor::{LineProcessor, Outcome};
    pub use crate::severity::Severity;
    pub use crate::sink::{parse_facility, LogSink, SyslogSink};
    pub use crate::stream::{DrainSummary, StreamDriver};
    pub use crate::supervisor::{CommandLine, RunReport, DEFAULT_SERVER_SCRIPT};
    pub use crate::{Error, SinkError};
}
