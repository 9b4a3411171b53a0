//! Runs the server and drains its output.
//!
//! [`run`] is the whole supervision protocol: start the child, move the
//! [`StreamDriver`] onto its own thread, wait for the child to exit and then
//! for the driver to finish the stream. Nothing is restarted and no signals
//! are sent; when the child goes away, so does the wrapper.

mod command;
mod process;

pub use command::{CommandLine, DEFAULT_SERVER_SCRIPT};
pub use process::SupervisedProcess;

use crate::error::{Error, Result};
use crate::sink::LogSink;
use crate::stream::{DrainSummary, StreamDriver};
use std::io::{BufReader, Write};
use std::process::ExitStatus;
use std::thread;

const READER_THREAD_NAME: &str = "domino-stdout";

/// Result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub status: ExitStatus,
    pub summary: DrainSummary,
}

impl RunReport {
    /// The exit code the wrapper should finish with.
    pub fn exit_code(&self) -> u8 {
        exit_code(self.status)
    }
}

/// Start `command` and feed its stdout through `driver` until both the
/// child has exited and its output is drained.
pub fn run<S, W>(command: &CommandLine, driver: StreamDriver<S, W>) -> Result<RunReport>
where
    S: LogSink + 'static,
    W: Write + Send + 'static,
{
    let (process, stdout) = SupervisedProcess::start(command)?;

    let reader = thread::Builder::new()
        .name(READER_THREAD_NAME.to_string())
        .spawn(move || driver.drain(BufReader::new(stdout)));
    let reader = match reader {
        Ok(handle) => handle,
        Err(e) => {
            process.abort();
            return Err(Error::ReaderThread(e));
        }
    };

    let status = process.wait()?;
    log::debug!("{} exited with {status}", command.program());

    let summary = reader.join().map_err(|_| Error::ReaderPanicked)?;
    log::debug!("output drained: {summary}");

    Ok(RunReport { status, summary })
}

/// Map a child's exit status to our own exit code.
///
/// A normal exit keeps its code. On unix a child killed by a signal maps to
/// `128 + signal`, as shells report it.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_exit_code_mirrors_child() {
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(exit_code(ExitStatus::from_raw(255 << 8)), 255);
    }

    #[test]
    fn test_exit_code_for_signal() {
        // SIGTERM
        assert_eq!(exit_code(ExitStatus::from_raw(15)), 143);
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }
}
