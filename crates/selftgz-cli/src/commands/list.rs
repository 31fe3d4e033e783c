//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::input::default_label;
use crate::input::read_archive_text;
use crate::output::OutputFormatter;
use anyhow::Result;
use selftgz_core::ExtractOptions;
use selftgz_core::list_entries;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let text = read_archive_text(&args.archive)?;
    let label = args
        .label
        .clone()
        .unwrap_or_else(|| default_label(&args.archive));

    let entries = add_archive_context(
        list_entries(&text, &label, &ExtractOptions::default()),
        &label,
    )?;

    if args.long {
        formatter.format_entries_long(&label, &entries, args.human_readable)
    } else {
        formatter.format_entries_short(&label, &entries)
    }
}
