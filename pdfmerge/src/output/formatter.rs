//! Message formatting and display.
//!
//! Status lines go to stdout. Warnings and errors go to stderr so they stay
//! visible when stdout carries a JSON report.
//!
//! # Examples
//!
//! ```
//! use pdfmerge::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Merging 3 files...");
//! formatter.success("Merged into out.pdf");
//! ```

use std::io::{self, IsTerminal};

use crate::error::{MergeError, Severity};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn decoration(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"), // Green
            Self::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            Self::Error => ("✗ ", "\x1b[31m"),   // Red
            Self::Debug => ("→ ", "\x1b[36m"),   // Cyan
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Render a message the way [`OutputFormatter`] prints it.
pub fn render(level: MessageLevel, message: &str, colored: bool) -> String {
    let (prefix, color_code) = level.decoration();
    if colored && !color_code.is_empty() {
        format!("{color_code}{prefix}{message}\x1b[0m")
    } else {
        format!("{prefix}{message}")
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Color status lines on stdout.
    stdout_colored: bool,
    /// Color warnings and errors on stderr.
    stderr_colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            stdout_colored: Self::should_use_color(&io::stdout()),
            stderr_colored: Self::should_use_color(&io::stderr()),
        }
    }

    /// Override color detection for each stream.
    pub fn with_colors(mut self, stdout: bool, stderr: bool) -> Self {
        self.stdout_colored = stdout;
        self.stderr_colored = stderr;
        self
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    /// Returns true if `stream` is a TTY, TERM is set and NO_COLOR is not.
    fn should_use_color(stream: &impl IsTerminal) -> bool {
        stream.is_terminal()
            && std::env::var_os("TERM").is_some()
            && std::env::var_os("NO_COLOR").is_none()
    }

    /// Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Always displayed (even in quiet mode).
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    /// Report a failed merge.
    ///
    /// An empty file list is a warning; every other failure is an error and
    /// carries its cause as a verbose detail line.
    pub fn notify_error(&self, err: &MergeError) {
        match err.severity() {
            Severity::Warning => self.warning(err.user_message()),
            Severity::Critical => {
                for line in err.user_message().lines() {
                    self.error(line);
                }
                self.detail("Cause", &err.to_string());
            }
        }
    }

    /// Whether a message of `level` is colored on the stream it goes to.
    fn colored_for(&self, level: MessageLevel) -> bool {
        if level.to_stderr() {
            self.stderr_colored
        } else {
            self.stdout_colored
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let line = render(level, message, self.colored_for(level));
        if level.to_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// Print detailed information.
    ///
    /// Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a list item.
    ///
    /// Suppressed in quiet mode.
    ///
    /// # Arguments
    ///
    /// * `index` - Item index (1-based)
    /// * `message` - Item message
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Print a line exactly as given, even in quiet mode.
    ///
    /// Used for output the user asked for explicitly, such as a JSON report.
    pub fn raw(&self, text: &str) {
        println!("{text}");
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
