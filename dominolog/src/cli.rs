use domino_syslog::config::PipelineConfig;
use domino_syslog::extract::TimestampFormat;
use domino_syslog::sink::{parse_facility, DEFAULT_TAG};
use domino_syslog::supervisor::{CommandLine, DEFAULT_SERVER_SCRIPT};
use std::time::Duration;

/// Run the Domino server and forward its console to syslog.
///
/// With `run <program> [args...]` any program is supervised instead; any
/// other arguments are passed on to the Domino server script.
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Locale of the server console; en_DK.UTF-8 selects YYYY/MM/DD dates
    #[clap(long, env = "LC_ALL")]
    pub locale: Option<String>,

    /// Keep console timestamps that differ from the clock by more than this
    #[clap(long, value_name = "MINUTES", default_value_t = 90)]
    pub stale_after_minutes: u64,

    /// Syslog tag
    #[clap(long, default_value = DEFAULT_TAG)]
    pub tag: String,

    /// Syslog facility to use
    #[clap(long, default_value = "news")]
    pub facility: String,

    /// Syslog server address (for remote syslog)
    #[clap(long, value_name = "HOST:PORT")]
    pub remote: Option<String>,

    /// Domino server startup script
    #[clap(long, env = "DOMINO_SERVER_SCRIPT", default_value = DEFAULT_SERVER_SCRIPT)]
    pub server_script: String,

    /// Arguments for the server script, or `run <program> [args...]`
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn pipeline_config(&self) -> Result<PipelineConfig, domino_syslog::Error> {
        Ok(PipelineConfig {
            timestamp_format: TimestampFormat::from_locale(self.locale()),
            stale_after: Duration::from_secs(self.stale_after_minutes.saturating_mul(60)),
            tag: self.tag.clone(),
            facility: parse_facility(&self.facility)?,
            remote: self.remote().map(String::from),
        })
    }

    pub fn command_line(&self) -> CommandLine {
        CommandLine::from_invocation(&self.command, &self.server_script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use domino_syslog::sink::DEFAULT_FACILITY;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dominolog").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_defaults_start_domino() {
        let args = parse(&["--server-script", "/opt/ibm/domino/bin/server"]);
        let command = args.command_line();
        assert_eq!(command.program(), "/bin/sh");
        assert_eq!(command.args(), ["/opt/ibm/domino/bin/server".to_string()]);

        let config = args.pipeline_config().expect("config");
        assert_eq!(config.tag, "domino");
        assert_eq!(config.stale_after, Duration::from_secs(90 * 60));
        assert_eq!(config.facility as i32, DEFAULT_FACILITY as i32);
    }

    #[test]
    fn test_server_args_pass_through() {
        let args = parse(&["--server-script", "/srv/server", "-jc", "-c"]);
        let command = args.command_line();
        assert_eq!(command.to_string(), "/bin/sh /srv/server -jc -c");
    }

    #[test]
    fn test_run_explicit_command() {
        let args = parse(&["--tag", "notes", "run", "/usr/bin/tail", "-f", "console.log"]);
        assert_eq!(args.tag, "notes");
        assert_eq!(args.command_line().to_string(), "/usr/bin/tail -f console.log");
    }

    #[test]
    fn test_locale_selects_iso_dates() {
        let args = parse(&["--locale", "en_DK.UTF-8", "run", "/bin/true"]);
        let config = args.pipeline_config().expect("config");
        assert_eq!(config.timestamp_format, TimestampFormat::Iso);
    }

    #[test]
    fn test_stale_after_minutes() {
        let args = parse(&["--stale-after-minutes", "5", "run", "/bin/true"]);
        let config = args.pipeline_config().expect("config");
        assert_eq!(config.stale_after, Duration::from_secs(300));
    }

    #[test]
    fn test_unknown_facility_is_rejected() {
        let args = parse(&["--facility", "usenet", "run", "/bin/true"]);
        assert!(matches!(
            args.pipeline_config(),
            Err(domino_syslog::Error::UnknownFacility(_))
        ));
    }

    #[test]
    fn test_remote() {
        let args = parse(&["--remote", "loghost:514", "run", "/bin/true"]);
        assert_eq!(args.remote(), Some("loghost:514"));
        let config = args.pipeline_config().expect("config");
        assert_eq!(config.remote.as_deref(), Some("loghost:514"));
    }
}
