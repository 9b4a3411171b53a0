/// Syslog sink backed by the `syslog` crate
use crate::error::{Error, Result, SinkError};
use crate::severity::Severity;
use crate::sink::LogSink;
use syslog::{Facility, Formatter3164, Logger, LoggerBackend};

/// Tag every forwarded message carries.
pub const DEFAULT_TAG: &str = "domino";

/// Nobody needs Usenet on a Domino host, so `news` is free for us.
pub const DEFAULT_FACILITY: Facility = Facility::LOG_NEWS;

/// Writes RFC 3164 messages to the local syslog socket or a remote collector.
pub struct SyslogSink {
    logger: Logger<LoggerBackend, Formatter3164>,
}

impl SyslogSink {
    /// Connect to syslog. With `remote` set, messages go over UDP to that
    /// address; otherwise to the local unix socket.
    pub fn connect(tag: &str, facility: Facility, remote: Option<&str>) -> Result<Self> {
        let formatter = Formatter3164 {
            facility,
            hostname: None,
            process: tag.to_string(),
            pid: std::process::id(),
        };

        let logger = match remote {
            Some(addr) => syslog::udp(formatter, "0.0.0.0:0", addr)
                .map_err(|e| Error::SyslogInit(format!("remote {addr}: {}", describe(&e))))?,
            None => syslog::unix(formatter)
                .map_err(|e| Error::SyslogInit(format!("local socket: {}", describe(&e))))?,
        };

        Ok(Self { logger })
    }
}

impl LogSink for SyslogSink {
    fn emit(&mut self, severity: Severity, message: &str) -> std::result::Result<(), SinkError> {
        let logger = &mut self.logger;
        let result = match severity {
            Severity::Emergency => logger.emerg(message),
            Severity::Alert => logger.alert(message),
            Severity::Critical => logger.crit(message),
            Severity::Error => logger.err(message),
            Severity::Warning => logger.warning(message),
            Severity::Notice => logger.notice(message),
            Severity::Informational => logger.info(message),
            Severity::Debug => logger.debug(message),
        };
        result.map_err(|e| SinkError(e.to_string()))
    }
}

/// Parse a facility name as used in syslog.conf, e.g. `news` or `local3`.
pub fn parse_facility(s: &str) -> Result<Facility> {
    s.to_lowercase()
        .parse::<Facility>()
        .map_err(|()| Error::UnknownFacility(s.to_string()))
}

/// An error and its causes, joined with `: `.
fn describe(e: &dyn std::error::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
