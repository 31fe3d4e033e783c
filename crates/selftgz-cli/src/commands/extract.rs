//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::input::default_label;
use crate::input::read_archive_text;
use crate::output::ExtractionSummary;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use console::Term;
use selftgz_core::ExtractOptions;
use selftgz_core::extract_file;
use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let text = read_archive_text(&args.archive)?;
    let label = args
        .label
        .clone()
        .unwrap_or_else(|| default_label(&args.archive));

    let options = build_options(args);

    let start = Instant::now();
    let data = add_archive_context(extract_file(&text, &label, &args.entry, &options), &label)?;
    let duration = start.elapsed();

    let Some(output) = &args.output else {
        ensure_printable(Term::stdout().is_term(), &args.entry, &data)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data).context("failed to write entry to stdout")?;
        stdout.flush().context("failed to flush stdout")?;
        return Ok(());
    };

    write_output(output, &data, args.force)?;

    formatter.format_extraction_result(&ExtractionSummary {
        archive_label: label,
        entry: args.entry.clone(),
        output: output.clone(),
        bytes_written: data.len() as u64,
        duration,
    })
}

fn build_options(args: &ExtractArgs) -> ExtractOptions {
    let mut options = ExtractOptions::default();
    if let Some(prefix) = &args.log_prefix {
        options = options.with_log_prefix(prefix.clone());
    }
    if let Some(max) = args.max_entry_size {
        options = options.with_max_entry_size(max);
    }
    options
}

/// Refuses to dump binary entry bytes onto an interactive terminal.
fn ensure_printable(stdout_is_term: bool, entry: &str, data: &[u8]) -> Result<()> {
    if stdout_is_term && std::str::from_utf8(data).is_err() {
        bail!(
            "Entry '{entry}' is binary and stdout is a terminal\n\
             HINT: Use --output to write it to a file, or redirect stdout."
        );
    }
    Ok(())
}

fn write_output(path: &Path, data: &[u8], force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Output file '{}' already exists\n\
             HINT: Use --force to overwrite it.",
            path.display()
        );
    }

    fs::write(path, data).with_context(|| format!("failed to write '{}'", path.display()))
}
