//! Output formatting and display for pdfmerge.
//!
//! This module handles all user-facing output:
//! - Formatted status messages
//! - Error and warning display
//! - Merge summaries
//! - Quiet and verbose modes

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter, render};

use std::path::PathBuf;

use crate::merge::MergeReport;

/// Display a successful merge to the user.
pub fn display_report(formatter: &OutputFormatter, report: &MergeReport) {
    formatter.success(&format!(
        "Merged {} file(s) into {} ({} pages, {})",
        report.sources.len(),
        report.output.display(),
        report.total_pages,
        format_file_size(report.bytes_written)
    ));

    for (position, source) in report.sources.iter().enumerate() {
        formatter.detail(
            &format!("{:>3}", position + 1),
            &format!(
                "{} ({} pages, {})",
                source.path.display(),
                source.page_count,
                format_file_size(source.file_size)
            ),
        );
    }
    if report.outline_entries > 0 {
        formatter.detail("Bookmarks", &report.outline_entries.to_string());
    }
    if let Some(ref title) = report.metadata.title {
        formatter.detail("Title", title);
    }
    if let Some(ref author) = report.metadata.author {
        formatter.detail("Author", author);
    }
}

/// Display the file list in merge order, numbered from 1.
pub fn display_list(formatter: &OutputFormatter, paths: &[PathBuf]) {
    if paths.is_empty() {
        formatter.info("No files selected");
        return;
    }
    for (position, path) in paths.iter().enumerate() {
        formatter.list_item(position + 1, &path.display().to_string());
    }
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
