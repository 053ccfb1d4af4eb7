//! CLI argument parsing for pdfmerge.
//!
//! This file is also compiled by the build script to render the man page,
//! so it only depends on `clap` and the standard library.

use clap::Parser;
use std::path::PathBuf;

/// Merge PDF files into a single document.
///
/// Files are merged in the order given. Directories are searched for PDF
/// files (sorted by name) and glob patterns are expanded. With
/// --interactive, the file list can be edited before merging.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge PDF files into a single document", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF files, directories or glob patterns (in order)
    ///
    /// Examples:
    ///   pdfmerge a.pdf b.pdf -o out.pdf
    ///   pdfmerge "chapters/*.pdf" -o book.pdf
    ///   pdfmerge scans/ -o scans.pdf
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    ///
    /// Written atomically: an existing file is only replaced once the
    /// merged document is complete. In interactive mode this is the
    /// default target of 'merge'.
    #[arg(short, long, value_name = "FILE", required_unless_present = "interactive")]
    pub output: Option<PathBuf>,

    /// Set title metadata for output PDF
    #[arg(long, value_name = "TEXT", env = "PDFMERGE_TITLE")]
    pub title: Option<String>,

    /// Set author metadata for output PDF
    #[arg(long, value_name = "TEXT", env = "PDFMERGE_AUTHOR")]
    pub author: Option<String>,

    /// Edit the file list interactively before merging
    ///
    /// Reads commands such as 'add', 'move', 'remove' and 'merge' from
    /// standard input. Type 'help' for the full list.
    #[arg(short, long)]
    pub interactive: bool,

    /// Accept every file when searching directories and glob patterns
    ///
    /// By default only files ending in .pdf are picked up.
    #[arg(long)]
    pub all_files: bool,

    /// Do not carry bookmarks of the input files into the output
    #[arg(long)]
    pub no_bookmarks: bool,

    /// Do not open the merged file afterwards
    #[arg(long)]
    pub no_open: bool,

    /// Print a JSON report of the merge to standard output
    #[arg(long)]
    pub json: bool,

    /// Verbose output - show details about each input
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
