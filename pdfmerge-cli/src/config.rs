//! Run configuration built from parsed arguments.

use std::path::PathBuf;

use pdfmerge::Metadata;
use pdfmerge::collect::{FileFilter, collect_inputs};
use pdfmerge::error::CollectError;
use tracing::level_filters::LevelFilter;

use crate::cli::Cli;

/// How much the binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Maximum level of log events written to stderr.
    pub fn log_level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::DEBUG,
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Self::Quiet
    }

    pub fn is_verbose(self) -> bool {
        self == Self::Verbose
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Merge the inputs into `output` and exit.
    OneShot { output: PathBuf },
    /// Read commands from stdin. `output` is the default merge target.
    Interactive { output: Option<PathBuf> },
}

/// Invalid combination of arguments.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No input files given (use --interactive to build the list step by step)")]
    NoInputs,

    #[error("No output file given (use -o/--output)")]
    MissingOutput,

    #[error("--verbose and --quiet cannot be used together")]
    ConflictingVerbosity,

    #[error(transparent)]
    Collect(#[from] CollectError),
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inputs after pattern and directory expansion, in order.
    pub inputs: Vec<PathBuf>,
    pub mode: Mode,
    pub metadata: Metadata,
    pub filter: FileFilter,
    pub import_outlines: bool,
    pub open_after: bool,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.verbose && cli.quiet {
            return Err(ConfigError::ConflictingVerbosity);
        }

        let mode = match (cli.interactive, &cli.output) {
            (true, output) => Mode::Interactive {
                output: output.clone(),
            },
            (false, _) if cli.inputs.is_empty() => return Err(ConfigError::NoInputs),
            (false, Some(output)) => Mode::OneShot {
                output: output.clone(),
            },
            (false, None) => return Err(ConfigError::MissingOutput),
        };

        let filter = if cli.all_files {
            FileFilter::All
        } else {
            FileFilter::Pdf
        };

        Ok(Self {
            inputs: collect_inputs(&cli.inputs, filter)?,
            mode,
            metadata: Metadata::new(cli.title.clone(), cli.author.clone()),
            filter,
            import_outlines: !cli.no_bookmarks,
            open_after: !cli.no_open,
            json: cli.json,
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
        })
    }
}
