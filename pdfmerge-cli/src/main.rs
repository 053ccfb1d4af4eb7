//! pdfmerge - Merge PDF files into a single document.
//!
//! One-shot: `pdfmerge a.pdf b.pdf -o out.pdf`. Interactive: `pdfmerge -i`.

mod cli;
mod config;
mod interactive;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pdfmerge::Merger;
use pdfmerge::output::{OutputFormatter, display_report};
use pdfmerge::session::{Action, Outcome, Session, SessionError};

use crate::cli::Cli;
use crate::config::{Config, Mode, Verbosity};
use crate::interactive::Shell;

/// Exit code for invalid arguments, matching clap's usage errors.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    init_tracing(verbosity);

    let formatter = OutputFormatter::new(verbosity.is_quiet(), verbosity.is_verbose());

    let config = match Config::try_from(&cli) {
        Ok(config) => config,
        Err(err) => {
            formatter.error(&err.to_string());
            return ExitCode::from(USAGE_ERROR);
        }
    };

    match run(&config, &formatter) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            formatter.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Log events go to stderr so they never mix with a JSON report.
fn init_tracing(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbosity.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic. Returns the process exit code.
fn run(config: &Config, formatter: &OutputFormatter) -> Result<u8> {
    let mut session = build_session(config)?;
    session.files_mut().extend(config.inputs.iter().cloned());

    match &config.mode {
        Mode::OneShot { output } => {
            formatter.debug(&format!(
                "Merging {} file(s) into {}",
                session.files().len(),
                output.display()
            ));
            merge_once(&mut session, config, formatter, Action::Merge(Some(output.clone())))
        }
        Mode::Interactive { output } => {
            let shell = Shell {
                default_output: output.clone(),
                prompt: io::stdin().is_terminal(),
                json: config.json,
            };
            if shell.prompt {
                formatter.info(&format!(
                    "{} v{} - type 'help' for commands",
                    pdfmerge::NAME,
                    pdfmerge::VERSION
                ));
            }
            shell.run(&mut session, formatter, io::stdin().lock())?;
            Ok(0)
        }
    }
}

fn build_session(config: &Config) -> Result<Session> {
    let mut merger = Merger::new();
    if !config.import_outlines {
        merger = merger.without_outlines();
    }

    let session = Session::new(config.filter)
        .context("Failed to set up the file filter")?
        .with_merger(merger)
        .with_metadata(config.metadata.clone())
        .open_after(config.open_after);

    Ok(session)
}

/// Dispatch a single merge and turn its result into an exit code.
fn merge_once(
    session: &mut Session,
    config: &Config,
    formatter: &OutputFormatter,
    action: Action,
) -> Result<u8> {
    match session.dispatch(action) {
        Ok(Outcome::Merged { report, open_error }) => {
            if config.json {
                formatter.raw(&report.to_json().context("Failed to serialize report")?);
            } else {
                display_report(formatter, &report);
            }
            if let Some(err) = open_error {
                formatter.warning(&format!("Could not open {}: {err}", report.output.display()));
            }
            Ok(0)
        }
        Ok(_) => Ok(0),
        Err(SessionError::Merge(err)) => {
            formatter.notify_error(&err);
            Ok(err.exit_code())
        }
        Err(err) => Err(err.into()),
    }
}
