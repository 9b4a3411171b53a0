/// Child process handle
use crate::error::{Error, Result};
use crate::supervisor::CommandLine;
use std::process::{Child, ChildStdout, ExitStatus, Stdio};

/// A running child whose stdout has been handed to the caller.
///
/// Stdin and stderr are inherited, so the server console stays usable and
/// its error output reaches the terminal or journal unchanged.
#[derive(Debug)]
pub struct SupervisedProcess {
    program: String,
    child: Child,
}

impl SupervisedProcess {
    /// Spawn `command` with a piped stdout.
    pub fn start(command: &CommandLine) -> Result<(Self, ChildStdout)> {
        let mut child = command
            .to_command()
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::MissingStdout(command.program().to_string()));
        };

        log::debug!("started {} as pid {}", command.program(), child.id());
        Ok((
            Self {
                program: command.program().to_string(),
                child,
            },
            stdout,
        ))
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Block until the child exits.
    pub fn wait(mut self) -> Result<ExitStatus> {
        self.child.wait().map_err(|source| Error::Wait {
            program: self.program.clone(),
            source,
        })
    }

    /// Kill and reap the child after a setup failure on our side.
    pub(crate) fn abort(mut self) {
        if let Err(e) = self.child.kill() {
            log::warn!("failed to kill {}: {e}", self.program);
        }
        let _ = self.child.wait();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_start_pipes_stdout() {
        let cmd = CommandLine::new("/bin/sh", vec!["-c".to_string(), "echo hello".to_string()]);
        let (process, mut stdout) = SupervisedProcess::start(&cmd).expect("start");
        assert!(process.id() > 0);

        let mut out = String::new();
        stdout.read_to_string(&mut out).expect("read");
        assert_eq!(out, "hello\n");

        let status = process.wait().expect("wait");
        assert!(status.success());
    }

    #[test]
    fn test_start_missing_program() {
        let cmd = CommandLine::new("/nonexistent/domino/server", Vec::new());
        let err = SupervisedProcess::start(&cmd).err();
        assert!(
            matches!(err, Some(Error::Spawn { ref program, .. }) if program == "/nonexistent/domino/server")
        );
    }

    #[test]
    fn test_wait_reports_exit_code() {
        let cmd = CommandLine::new("/bin/sh", vec!["-c".to_string(), "exit 3".to_string()]);
        let (process, _stdout) = SupervisedProcess::start(&cmd).expect("start");
        let status = process.wait().expect("wait");
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_abort_reaps_child() {
        let cmd = CommandLine::new("/bin/sh", vec!["-c".to_string(), "sleep 30".to_string()]);
        let (process, _stdout) = SupervisedProcess::start(&cmd).expect("start");
        process.abort();
    }
}
