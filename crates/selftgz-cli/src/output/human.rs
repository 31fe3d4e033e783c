//! Human-readable output formatter with colors and styling.

use super::formatter::ExtractionSummary;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use selftgz_core::EntryInfo;
use selftgz_core::EntryKind;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    const fn kind_char(kind: EntryKind) -> char {
        match kind {
            EntryKind::File => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::Hardlink => 'h',
            EntryKind::Other => '?',
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(&self, summary: &ExtractionSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Extracted {}",
                style("✓").green().bold(),
                summary.entry
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Extracted {}", summary.entry));
        }

        let _ = self
            .term
            .write_line(&format!("  Output: {}", summary.output.display()));
        let _ = self.term.write_line(&format!(
            "  Size: {}",
            Self::format_size(summary.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Archive: {}", summary.archive_label));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", summary.duration));
        }

        Ok(())
    }

    fn format_entries_short(&self, _label: &str, entries: &[EntryInfo]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let _ = self.term.write_line(&entry.name);
        }

        Ok(())
    }

    fn format_entries_long(
        &self,
        label: &str,
        entries: &[EntryInfo],
        human_readable: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let size_str = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };

            let _ = self.term.write_line(&format!(
                "{} {:>10}  {}",
                Self::kind_char(entry.kind),
                size_str,
                entry.name
            ));
        }

        let total: u64 = entries.iter().map(|entry| entry.size).sum();
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} entries, {} in {label}",
            entries.len(),
            Self::format_size(total)
        ));

        Ok(())
    }
}
