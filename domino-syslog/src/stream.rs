//! Line-oriented drain of the child's output.
//!
//! The [`StreamDriver`] owns the processor, the sink and the passthrough
//! writer. It reads one line at a time, forwards it through the processor
//! and then echoes the raw bytes, so local output and syslog see lines in
//! the order the child wrote them.

use crate::processor::{LineProcessor, Outcome};
use crate::sink::LogSink;
use std::fmt;
use std::io::{BufRead, Write};

/// Counters for one drained stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainSummary {
    pub lines_read: u64,
    pub emitted: u64,
    pub discarded: u64,
    pub sink_failures: u64,
    pub passthrough_failures: u64,
    /// Set when reading stopped because of an I/O error rather than EOF.
    pub read_error: Option<String>,
}

impl fmt::Display for DrainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines read, {} forwarded, {} skipped, {} syslog errors",
            self.lines_read, self.emitted, self.discarded, self.sink_failures
        )
    }
}

pub struct StreamDriver<S, W> {
    processor: LineProcessor,
    sink: S,
    passthrough: W,
}

impl<S: LogSink, W: Write> StreamDriver<S, W> {
    pub fn new(processor: LineProcessor, sink: S, passthrough: W) -> Self {
        Self {
            processor,
            sink,
            passthrough,
        }
    }

    /// Read `input` to the end, or to the first read error.
    ///
    /// Returns once, after the last line has been forwarded and echoed.
    pub fn drain<R: BufRead>(mut self, mut input: R) -> DrainSummary {
        let mut summary = DrainSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    log::error!("error reading child output: {e}");
                    summary.read_error = Some(e.to_string());
                    break;
                }
            }

            let line = trim_line_ending(&buf);
            summary.lines_read += 1;
            match self.processor.process(line, &mut self.sink) {
                Outcome::Emitted(_) => summary.emitted += 1,
                Outcome::Discarded(_) => summary.discarded += 1,
                Outcome::SinkFailed(_) => summary.sink_failures += 1,
            }

            if let Err(e) = self.echo(line) {
                if summary.passthrough_failures == 0 {
                    log::warn!("error writing to standard output: {e}");
                }
                summary.passthrough_failures += 1;
            }
        }

        summary
    }

    fn echo(&mut self, line: &[u8]) -> std::io::Result<()> {
        self.passthrough.write_all(line)?;
        self.passthrough.write_all(b"\n")?;
        self.passthrough.flush()
    }
}

/// Drop a trailing `\n` and, before it, a `\r`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
