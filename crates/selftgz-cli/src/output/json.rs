//! JSON output formatter for machine-readable results.

use super::formatter::ExtractionSummary;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use selftgz_core::EntryInfo;
use serde::Serialize;
use std::io;
use std::io::Write;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    size: u64,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    archive: &'a str,
    total_entries: usize,
    total_size: u64,
    entries: Vec<EntryOutput<'a>>,
}

impl<'a> ListOutput<'a> {
    fn new(label: &'a str, entries: &'a [EntryInfo]) -> Self {
        Self {
            archive: label,
            total_entries: entries.len(),
            total_size: entries.iter().map(|entry| entry.size).sum(),
            entries: entries
                .iter()
                .map(|entry| EntryOutput {
                    name: &entry.name,
                    size: entry.size,
                    kind: entry.kind.as_str(),
                })
                .collect(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, summary: &ExtractionSummary) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput<'a> {
            archive: &'a str,
            entry: &'a str,
            output_path: String,
            bytes_written: u64,
            duration_ms: u128,
        }

        let data = ExtractionOutput {
            archive: &summary.archive_label,
            entry: &summary.entry,
            output_path: summary.output.display().to_string(),
            bytes_written: summary.bytes_written,
            duration_ms: summary.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_entries_short(&self, label: &str, entries: &[EntryInfo]) -> Result<()> {
        Self::output(&JsonOutput::success("list", ListOutput::new(label, entries)))
    }

    fn format_entries_long(
        &self,
        label: &str,
        entries: &[EntryInfo],
        _human_readable: bool,
    ) -> Result<()> {
        Self::output(&JsonOutput::success("list", ListOutput::new(label, entries)))
    }
}
