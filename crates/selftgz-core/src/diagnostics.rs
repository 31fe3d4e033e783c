//! Diagnostic sinks for extraction events.
//!
//! The extractor reports two observable events: reaching the end of an
//! archive without a match, and failing to read an archive at all. Both are
//! routed through a [`DiagnosticSink`] so callers decide where they go. The
//! default sink forwards them to the `log` facade.

use crate::ExtractionError;
use console::style;

/// Log target used by [`LogDiagnostics`].
pub const LOG_TARGET: &str = "selftgz";

/// Receiver for extraction diagnostics.
///
/// Implementations must not influence the extraction result; they only
/// observe it.
///
/// # Examples
///
/// ```
/// use selftgz_core::DiagnosticSink;
/// use selftgz_core::ExtractionError;
///
/// struct StderrSink;
///
/// impl DiagnosticSink for StderrSink {
///     fn end_of_archive(&mut self, prefix: &str, label: &str, target: &str) {
///         eprintln!("{prefix} no '{target}' in {label}");
///     }
///
///     fn unreadable_archive(&mut self, prefix: &str, label: &str, error: &ExtractionError) {
///         eprintln!("{prefix} cannot read {label}: {error}");
///     }
/// }
/// ```
pub trait DiagnosticSink: Send {
    /// Called when the tar stream ended before an entry named `target` was
    /// found.
    fn end_of_archive(&mut self, prefix: &str, label: &str, target: &str);

    /// Called when the archive could not be decoded, decompressed, or parsed.
    fn unreadable_archive(&mut self, prefix: &str, label: &str, error: &ExtractionError);
}

/// Sink that forwards diagnostics to the `log` crate.
///
/// End-of-archive is logged at `info`, unreadable archives at `error`.
/// The prefix is styled cyan and unreadable-archive lines red when stderr
/// supports colors.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

fn end_of_archive_message(prefix: &str, label: &str, target: &str) -> String {
    format!(
        "{} reached end of archive '{label}' without finding '{target}'",
        style(prefix).for_stderr().cyan()
    )
}

fn unreadable_message(prefix: &str, label: &str, error: &ExtractionError) -> String {
    format!(
        "{} {}",
        style(prefix).for_stderr().cyan(),
        style(format!("cannot read archive '{label}': {error}"))
            .for_stderr()
            .red()
    )
}

impl DiagnosticSink for LogDiagnostics {
    fn end_of_archive(&mut self, prefix: &str, label: &str, target: &str) {
        log::info!(target: LOG_TARGET, "{}", end_of_archive_message(prefix, label, target));
    }

    fn unreadable_archive(&mut self, prefix: &str, label: &str, error: &ExtractionError) {
        log::error!(target: LOG_TARGET, "{}", unreadable_message(prefix, label, error));
    }
}

/// Sink that discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn end_of_archive(&mut self, _prefix: &str, _label: &str, _target: &str) {}

    fn unreadable_archive(&mut self, _prefix: &str, _label: &str, _error: &ExtractionError) {}
}
