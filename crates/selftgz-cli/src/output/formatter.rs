//! Output formatter trait for CLI results.

use anyhow::Result;
use selftgz_core::EntryInfo;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of an extraction written to a file.
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub archive_label: String,
    pub entry: String,
    pub output: PathBuf,
    pub bytes_written: u64,
    pub duration: Duration,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of an extraction to a file
    fn format_extraction_result(&self, summary: &ExtractionSummary) -> Result<()>;

    /// Format entry names, one per line
    fn format_entries_short(&self, label: &str, entries: &[EntryInfo]) -> Result<()>;

    /// Format entries with kind and size
    fn format_entries_long(
        &self,
        label: &str,
        entries: &[EntryInfo],
        human_readable: bool,
    ) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
