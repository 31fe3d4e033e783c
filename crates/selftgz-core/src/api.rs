//! High-level public API for embedded archive extraction.

use crate::DiagnosticSink;
use crate::ExtractOptions;
use crate::ExtractionError;
use crate::ExtractionRequest;
use crate::LogDiagnostics;
use crate::Result;
use crate::formats::EntryInfo;
use crate::formats::compression::GzipSource;
use crate::formats::compression::open_gzip;
use crate::formats::encoding::decode_archive_text;
use crate::formats::tar;
use crate::formats::tar::ScanError;

/// Extracts one entry from a base64-encoded tar.gz archive.
///
/// Decodes `archive_data`, decompresses it, and scans the tar entries in
/// order until one is named exactly `target_path`. The first match wins.
/// Diagnostics go to the `log` crate, tagged with `options.log_prefix` and
/// `archive_label`.
///
/// # Arguments
///
/// * `archive_data` - Base64 text of a gzip-compressed tar stream
/// * `archive_label` - Human-readable name used in diagnostics
/// * `target_path` - Exact, case-sensitive entry name
/// * `options` - Log prefix and size limit
///
/// # Errors
///
/// Returns an error if:
/// - Arguments are blank (`InvalidArguments`)
/// - The text is not base64 (`DecodeFailure`)
/// - The bytes are not gzip (`DecompressFailure`)
/// - The tar stream is corrupt (`MalformedArchive`)
/// - No entry has the requested name (`EntryNotFound`)
/// - The entry exceeds `options.max_entry_size` (`EntryTooLarge`)
///
/// # Examples
///
/// ```
/// use selftgz_core::ExtractOptions;
/// use selftgz_core::extract_file;
/// use selftgz_core::test_utils::encode_tgz;
///
/// let archive = encode_tgz(&[("templates/index.html", &b"<html></html>"[..])]);
/// let html = extract_file(
///     &archive,
///     "templates",
///     "templates/index.html",
///     &ExtractOptions::default(),
/// )?;
/// assert_eq!(html, b"<html></html>");
/// # Ok::<(), selftgz_core::ExtractionError>(())
/// ```
pub fn extract_file(
    archive_data: &str,
    archive_label: &str,
    target_path: &str,
    options: &ExtractOptions,
) -> Result<Vec<u8>> {
    extract_file_with_diagnostics(
        archive_data,
        archive_label,
        target_path,
        options,
        &mut LogDiagnostics,
    )
}

/// Same as [`extract_file`], reporting diagnostics to `sink` instead of
/// the `log` crate.
pub fn extract_file_with_diagnostics(
    archive_data: &str,
    archive_label: &str,
    target_path: &str,
    options: &ExtractOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<u8>> {
    ExtractionRequest::new(archive_data, archive_label, target_path)
        .with_options(options.clone())
        .extract_with(sink)
}

/// Returns `true` if the archive has an entry named exactly `target_path`.
///
/// The matching entry's body is never read.
pub fn contains_entry(
    archive_data: &str,
    archive_label: &str,
    target_path: &str,
    options: &ExtractOptions,
) -> Result<bool> {
    let request = ExtractionRequest::new(archive_data, archive_label, target_path)
        .with_options(options.clone());
    request.validate()?;

    let target = target_path.as_bytes();
    report_unreadable(
        scan_archive(archive_data, archive_label, |source| {
            tar::has_entry(source, target)
        }),
        options,
        archive_label,
        &mut LogDiagnostics,
    )
}

/// Lists every entry of the archive in tar order.
///
/// Entry bodies are skipped, never retained.
///
/// # Examples
///
/// ```
/// use selftgz_core::ExtractOptions;
/// use selftgz_core::list_entries;
/// use selftgz_core::test_utils::encode_tgz;
///
/// let archive = encode_tgz(&[("a.txt", &b"1"[..]), ("b.txt", &b"22"[..])]);
/// let entries = list_entries(&archive, "pair", &ExtractOptions::default())?;
/// let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["a.txt", "b.txt"]);
/// # Ok::<(), selftgz_core::ExtractionError>(())
/// ```
pub fn list_entries(
    archive_data: &str,
    archive_label: &str,
    options: &ExtractOptions,
) -> Result<Vec<EntryInfo>> {
    if archive_data.trim().is_empty() {
        return Err(ExtractionError::InvalidArguments(
            "archive data is empty".to_string(),
        ));
    }

    report_unreadable(
        scan_archive(archive_data, archive_label, |source| tar::list_entries(source)),
        options,
        archive_label,
        &mut LogDiagnostics,
    )
}

/// Runs the full pipeline for one request.
pub(crate) fn run_extraction(
    request: &ExtractionRequest<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<u8>> {
    request.validate()?;

    let label = request.archive_label();
    let target = request.target_path();
    let options = request.options();
    let max_size = options.max_entry_size;

    let scanned = scan_archive(request.archive_data(), label, |source| {
        tar::find_entry(source, target.as_bytes(), max_size)
    });

    match report_unreadable(scanned, options, label, sink)? {
        Some(body) => Ok(body),
        None => {
            sink.end_of_archive(&options.log_prefix, label, target);
            Err(ExtractionError::EntryNotFound {
                label: label.to_string(),
                path: target.to_string(),
            })
        }
    }
}

/// Decodes, opens, and scans an archive, attributing scan failures to the
/// stage that caused them.
///
/// The decoded buffer and every reader layered on it are dropped before
/// this returns, on success and failure alike.
fn scan_archive<T, F>(archive_data: &str, label: &str, scan: F) -> Result<T>
where
    F: FnOnce(&mut GzipSource<'_>) -> std::result::Result<T, ScanError>,
{
    let bytes = decode_archive_text(archive_data, label)?;
    let mut source = open_gzip(&bytes, label)?;

    let outcome = scan(&mut source);
    outcome.map_err(|err| classify(err, &mut source, label))
}

fn classify(err: ScanError, source: &mut GzipSource<'_>, label: &str) -> ExtractionError {
    if let Some(fault) = source.take_fault() {
        return ExtractionError::DecompressFailure {
            label: label.to_string(),
            source: fault,
        };
    }

    match err {
        ScanError::Io(io_err) => ExtractionError::MalformedArchive {
            label: label.to_string(),
            reason: io_err.to_string(),
        },
        ScanError::Truncated { expected, actual } => ExtractionError::MalformedArchive {
            label: label.to_string(),
            reason: format!("entry truncated: expected {expected} bytes, got {actual}"),
        },
        ScanError::TooLarge { path, size, max } => ExtractionError::EntryTooLarge {
            label: label.to_string(),
            path,
            size,
            max,
        },
    }
}

/// Forwards unreadable-archive failures to `sink`, passing the result through.
fn report_unreadable<T>(
    result: Result<T>,
    options: &ExtractOptions,
    label: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<T> {
    if let Err(err) = &result
        && err.is_unreadable()
    {
        sink.unreadable_archive(&options.log_prefix, label, err);
    }
    result
}
