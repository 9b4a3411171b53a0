mod cli;

use clap::Parser;
use domino_syslog::prelude::*;
use domino_syslog::supervisor;
use log::{error, info};
use std::process::ExitCode;

fn run(args: &cli::Args) -> Result<u8, Error> {
    let config = args.pipeline_config()?;
    let processor = config.line_processor()?;
    let sink = config.connect_sink()?;
    let command = args.command_line();

    info!("Starting {command}");
    let driver = StreamDriver::new(processor, sink, std::io::stdout());
    let report = supervisor::run(&command, driver)?;

    if report.status.success() {
        info!("successfully ran {} to completion", command.program());
    } else {
        error!("error running {}: {}", command.program(), report.status);
    }
    info!("{}", report.summary);

    Ok(report.exit_code())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
