//! Error conversion utilities for CLI.
//!
//! Converts selftgz-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use selftgz_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, label: &str) -> anyhow::Error {
    match err {
        ExtractionError::InvalidArguments(reason) => {
            anyhow!(
                "Invalid input for archive '{label}': {reason}\n\
                 HINT: The archive file must contain base64 text and the entry name must not be empty."
            )
        }
        ExtractionError::DecodeFailure { source, .. } => {
            anyhow!(
                "Archive '{label}' is not valid base64: {source}\n\
                 HINT: Only the standard alphabet with '=' padding is accepted; line breaks are ignored."
            )
        }
        ExtractionError::DecompressFailure { source, .. } => {
            anyhow!(
                "Archive '{label}' is not a readable gzip stream: {source}\n\
                 HINT: The payload must be a .tar.gz encoded with base64."
            )
        }
        ExtractionError::MalformedArchive { reason, .. } => {
            anyhow!(
                "Invalid archive '{label}': {reason}\n\
                 HINT: The archive may be corrupted or truncated."
            )
        }
        ExtractionError::EntryNotFound { path, .. } => {
            anyhow!(
                "Entry '{path}' not found in archive '{label}'\n\
                 HINT: Names must match exactly; run 'selftgz list' to see available entries."
            )
        }
        ExtractionError::EntryTooLarge {
            path, size, max, ..
        } => {
            anyhow!(
                "Entry '{path}' in archive '{label}' is {size} bytes, over the {max} byte limit\n\
                 HINT: Use --max-entry-size to raise the limit."
            )
        }
    }
}

/// Adds context to a library result about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    label: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_not_found_error() {
        let err = ExtractionError::EntryNotFound {
            label: "assets".into(),
            path: "missing.txt".into(),
        };
        let converted = convert_extraction_error(err, "assets");
        let msg = format!("{converted:?}");
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("selftgz list"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_too_large_error() {
        let err = ExtractionError::EntryTooLarge {
            label: "assets".into(),
            path: "big.bin".into(),
            size: 2048,
            max: 1024,
        };
        let msg = format!("{:?}", convert_extraction_error(err, "assets"));
        assert!(msg.contains("2048 bytes"));
        assert!(msg.contains("--max-entry-size"));
    }

    #[test]
    fn test_convert_decompress_error() {
        let err = ExtractionError::DecompressFailure {
            label: "bundle".into(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid gzip header"),
        };
        let msg = format!("{:?}", convert_extraction_error(err, "bundle"));
        assert!(msg.contains("invalid gzip header"));
        assert!(msg.contains("'bundle'"));
    }

    #[test]
    fn test_add_archive_context_passes_ok() {
        let result: Result<u8, ExtractionError> = Ok(7);
        assert_eq!(add_archive_context(result, "x").ok(), Some(7));
    }
}
