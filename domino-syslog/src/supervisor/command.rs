/// Command line of the supervised server
use std::fmt;
use std::process::Command;

/// Domino's startup script. It is a plain shell script without a shebang
/// line, so it has to be run through `sh`.
pub const DEFAULT_SERVER_SCRIPT: &str = "/opt/ibm/domino/bin/server";

const SHELL: &str = "/bin/sh";
const RUN_KEYWORD: &str = "run";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the command from our own arguments.
    ///
    /// `run <program> [args...]` runs exactly that program. Anything else
    /// starts the Domino server script with the arguments appended, so the
    /// wrapper can stand in for `server` itself.
    pub fn from_invocation(args: &[String], server_script: &str) -> Self {
        if let Some((keyword, rest)) = args.split_first() {
            if keyword == RUN_KEYWORD {
                if let Some((program, program_args)) = rest.split_first() {
                    return Self::new(program.clone(), program_args.to_vec());
                }
            }
        }

        let mut script_args = Vec::with_capacity(args.len() + 1);
        script_args.push(server_script.to_string());
        script_args.extend(args.iter().cloned());
        Self::new(SHELL, script_args)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
