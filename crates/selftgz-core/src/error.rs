//! Error types for embedded archive extraction.

use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Coarse classification of an [`ExtractionError`].
///
/// Useful when a caller only needs to branch on the failure class, for
/// example to treat [`ErrorKind::EntryNotFound`] as "asset absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied missing or unusable arguments.
    InvalidArguments,
    /// Archive text is not valid base64.
    DecodeFailure,
    /// Decoded bytes are not a readable gzip stream.
    DecompressFailure,
    /// Decompressed stream is not a readable tar stream.
    MalformedArchive,
    /// Archive is well formed but has no entry with the requested name.
    EntryNotFound,
    /// Matched entry is larger than the configured limit.
    EntryTooLarge,
}

impl ErrorKind {
    /// Returns a short, stable name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArguments => "invalid_arguments",
            Self::DecodeFailure => "decode_failure",
            Self::DecompressFailure => "decompress_failure",
            Self::MalformedArchive => "malformed_archive",
            Self::EntryNotFound => "entry_not_found",
            Self::EntryTooLarge => "entry_too_large",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while extracting an entry from an embedded archive.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Arguments were missing, surplus, or empty. Detected before decoding.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Archive text is not valid base64.
    #[error("archive '{label}' is not valid base64: {source}")]
    DecodeFailure {
        /// Archive label.
        label: String,
        /// Underlying decoder error.
        #[source]
        source: base64::DecodeError,
    },

    /// Decoded bytes are not a valid gzip stream.
    #[error("archive '{label}' is not a valid gzip stream: {source}")]
    DecompressFailure {
        /// Archive label.
        label: String,
        /// Underlying decompressor error.
        #[source]
        source: std::io::Error,
    },

    /// Tar structure is invalid or corrupt.
    #[error("archive '{label}' is malformed: {reason}")]
    MalformedArchive {
        /// Archive label.
        label: String,
        /// What went wrong.
        reason: String,
    },

    /// End of archive was reached without a matching entry.
    #[error("entry '{path}' not found in archive '{label}'")]
    EntryNotFound {
        /// Archive label.
        label: String,
        /// Requested entry path.
        path: String,
    },

    /// Matched entry exceeds the configured size limit.
    #[error("entry '{path}' in archive '{label}' is too large ({size} > {max} bytes)")]
    EntryTooLarge {
        /// Archive label.
        label: String,
        /// Requested entry path.
        path: String,
        /// Size declared by the entry header.
        size: u64,
        /// Configured limit.
        max: u64,
    },
}

impl ExtractionError {
    /// Returns the classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use selftgz_core::ErrorKind;
    /// use selftgz_core::ExtractionError;
    ///
    /// let err = ExtractionError::EntryNotFound {
    ///     label: "assets".into(),
    ///     path: "missing.txt".into(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::EntryNotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments(_) => ErrorKind::InvalidArguments,
            Self::DecodeFailure { .. } => ErrorKind::DecodeFailure,
            Self::DecompressFailure { .. } => ErrorKind::DecompressFailure,
            Self::MalformedArchive { .. } => ErrorKind::MalformedArchive,
            Self::EntryNotFound { .. } => ErrorKind::EntryNotFound,
            Self::EntryTooLarge { .. } => ErrorKind::EntryTooLarge,
        }
    }

    /// Returns `true` if the archive was readable but lacked the entry.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound { .. })
    }

    /// Returns `true` if the archive itself could not be read.
    ///
    /// Covers base64, gzip, and tar level failures.
    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(
            self,
            Self::DecodeFailure { .. } | Self::DecompressFailure { .. } | Self::MalformedArchive { .. }
        )
    }

    /// Returns the archive label this error refers to, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::InvalidArguments(_) => None,
            Self::DecodeFailure { label, .. }
            | Self::DecompressFailure { label, .. }
            | Self::MalformedArchive { label, .. }
            | Self::EntryNotFound { label, .. }
            | Self::EntryTooLarge { label, .. } => Some(label),
        }
    }
}
