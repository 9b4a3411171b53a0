//! Per-line processing: strip prefixes, classify, rebuild, forward.
//!
//! ```text
//! > [0A1C:0002] 01/02/2006 03:04:05 PM Warning: disk low
//! | |           |                      |
//! | |           |                      +-- message, classified
//! | |           +-- timestamp, kept only when stale
//! | +-- thread id
//! +-- reprint marker, dropped
//! ```
//!
//! The line above is forwarded at `warning` as
//! `Warning: disk low (@ 01/02/2006 03:04:05 PM) [0A1C:0002]`.

use crate::classify::Classifier;
use crate::encoding::latin1_to_string;
use crate::extract::{ThreadIdExtractor, TimestampExtractor};
use crate::severity::Severity;
use crate::sink::LogSink;
use chrono::{DateTime, Local};

/// Lines shorter than this are stray blanks or prompt fragments.
pub const MIN_LINE_LEN: usize = 3;

/// Domino sometimes reprints console input prefixed with this.
pub const REPRINT_MARKER: &[u8] = b"> ";

/// A message ready for the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    /// Fewer than [`MIN_LINE_LEN`] bytes.
    TooShort,
    /// Nothing left after the thread id and timestamp.
    Empty,
}

/// What happened to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Discarded(Discard),
    Emitted(Severity),
    /// The sink rejected the message; it has been reported and dropped.
    SinkFailed(Severity),
}

/// Turns raw console lines into classified syslog messages.
///
/// Holds only immutable state, so one processor serves every line.
#[derive(Debug, Clone)]
pub struct LineProcessor {
    classifier: Classifier,
    thread_ids: ThreadIdExtractor,
    timestamps: TimestampExtractor,
}

impl LineProcessor {
    pub fn new(
        classifier: Classifier,
        thread_ids: ThreadIdExtractor,
        timestamps: TimestampExtractor,
    ) -> Self {
        Self {
            classifier,
            thread_ids,
            timestamps,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Build the record for `line` without emitting it.
    pub fn render(&self, line: &[u8]) -> Result<Record, Discard> {
        self.render_at(line, Local::now())
    }

    /// Like [`render`](Self::render), judging timestamps against `now`.
    pub fn render_at(&self, line: &[u8], now: DateTime<Local>) -> Result<Record, Discard> {
        if line.len() < MIN_LINE_LEN {
            return Err(Discard::TooShort);
        }
        let rest = line.strip_prefix(REPRINT_MARKER).unwrap_or(line);
        let (thread_id, rest) = self.thread_ids.extract(rest);
        let (timestamp, rest) = self.timestamps.extract_at(rest, now);
        if rest.is_empty() {
            return Err(Discard::Empty);
        }

        let mut message = latin1_to_string(rest);
        let severity = self.classifier.classify(&message);
        if !timestamp.is_empty() {
            message.push_str(&format!(" (@ {timestamp})"));
        }
        if !thread_id.is_empty() {
            message.push_str(&format!(" [{thread_id}]"));
        }
        Ok(Record { severity, message })
    }

    /// Render `line` and hand it to `sink`.
    ///
    /// A sink failure is logged and reported in the outcome; it never stops
    /// the caller from processing further lines.
    pub fn process<S: LogSink + ?Sized>(&self, line: &[u8], sink: &mut S) -> Outcome {
        let record = match self.render(line) {
            Ok(record) => record,
            Err(discard) => return Outcome::Discarded(discard),
        };
        match sink.emit(record.severity, &record.message) {
            Ok(()) => Outcome::Emitted(record.severity),
            Err(e) => {
                log::error!("{e} (dropped {} message)", record.severity);
                Outcome::SinkFailed(record.severity)
            }
        }
    }
}
