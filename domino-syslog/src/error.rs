//! Error types shared by the pipeline and the supervisor.
//!
//! Only [`Error`] values abort a run. Problems that concern a single line
//! (an unparseable timestamp, a failed syslog write) are reported on the
//! diagnostic log and never surface as an `Error`.

use thiserror::Error;

/// Fatal errors: bad rule table, unusable syslog, child process failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown syslog facility: {0}")]
    UnknownFacility(String),

    #[error("failed to connect to syslog: {0}")]
    SyslogInit(String),

    #[error("error starting {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error getting pipe from {0}")]
    MissingStdout(String),

    #[error("error waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start output reader thread: {0}")]
    ReaderThread(#[source] std::io::Error),

    #[error("output reader thread panicked")]
    ReaderPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;

/// A single message could not be written to the logging sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("error writing to syslog: {0}")]
pub struct SinkError(pub String);
