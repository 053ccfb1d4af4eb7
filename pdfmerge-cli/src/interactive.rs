//! Line-oriented shell over a [`Session`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use pdfmerge::output::{OutputFormatter, display_list, display_report};
use pdfmerge::session::{Action, COMMANDS, Outcome, Session, SessionError};

const PROMPT: &str = "pdfmerge> ";

/// Settings of the shell loop.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    /// Target of a `merge` without an argument.
    pub default_output: Option<PathBuf>,
    /// Print a prompt before each line.
    pub prompt: bool,
    /// Print merge reports as JSON.
    pub json: bool,
}

impl Shell {
    /// Read and dispatch commands until `quit` or end of input.
    pub fn run<R: BufRead>(
        &self,
        session: &mut Session,
        formatter: &OutputFormatter,
        mut input: R,
    ) -> Result<()> {
        let mut line = String::new();

        loop {
            if self.prompt {
                print!("{PROMPT}");
                io::stdout().flush().context("Failed to write prompt")?;
            }

            line.clear();
            if input.read_line(&mut line).context("Failed to read command")? == 0 {
                break;
            }

            let action = match Action::parse(&line) {
                Ok(Some(action)) => self.with_default_output(action),
                Ok(None) => continue,
                Err(err) => {
                    formatter.warning(&err.to_string());
                    continue;
                }
            };

            match session.dispatch(action) {
                Ok(Outcome::Quit) => break,
                Ok(outcome) => self.show(formatter, &outcome)?,
                Err(SessionError::Merge(err)) => formatter.notify_error(&err),
                Err(err) => formatter.warning(&err.to_string()),
            }
        }

        Ok(())
    }

    fn with_default_output(&self, action: Action) -> Action {
        match (action, &self.default_output) {
            (Action::Merge(None), Some(output)) => Action::Merge(Some(output.clone())),
            (action, _) => action,
        }
    }

    fn show(&self, formatter: &OutputFormatter, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Listed(paths) => display_list(formatter, paths),
            Outcome::Help => {
                for (usage, description) in COMMANDS {
                    formatter.info(&format!("  {usage:<24} {description}"));
                }
            }
            Outcome::Merged { report, open_error } => {
                if self.json {
                    formatter.raw(&report.to_json().context("Failed to serialize report")?);
                } else {
                    display_report(formatter, report);
                }
                if let Some(err) = open_error {
                    formatter.warning(&format!("Could not open {}: {err}", report.output.display()));
                }
            }
            Outcome::Cancelled => formatter.warning("No output file selected, nothing merged"),
            other => {
                if let Some(message) = status_line(other) {
                    formatter.info(&message);
                }
            }
        }
        Ok(())
    }
}

/// One-line confirmation of a list or metadata change.
pub fn status_line(outcome: &Outcome) -> Option<String> {
    let line = match outcome {
        Outcome::Added { added, total } => format!("Added {added} file(s), {total} in list"),
        Outcome::Removed(paths) => match paths.as_slice() {
            [single] => format!("Removed {}", single.display()),
            many => format!("Removed {} files", many.len()),
        },
        Outcome::Moved { from, to } => format!("Moved file {} to position {}", from + 1, to + 1),
        Outcome::Swapped { a, b } => format!("Swapped files {} and {}", a + 1, b + 1),
        Outcome::Cleared(count) => format!("Cleared {count} file(s)"),
        Outcome::TitleSet(Some(title)) => format!("Title: {title}"),
        Outcome::TitleSet(None) => "Title cleared".to_string(),
        Outcome::AuthorSet(Some(author)) => format!("Author: {author}"),
        Outcome::AuthorSet(None) => "Author cleared".to_string(),
        Outcome::Listed(_)
        | Outcome::Merged { .. }
        | Outcome::Cancelled
        | Outcome::Help
        | Outcome::Quit => return None,
    };
    Some(line)
}
