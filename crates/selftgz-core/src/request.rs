//! Extraction requests.

use crate::DiagnosticSink;
use crate::ExtractOptions;
use crate::ExtractionError;
use crate::LogDiagnostics;
use crate::Result;

/// Minimum number of positional arguments: data, label, path.
const MIN_ARGS: usize = 3;

/// Maximum number of positional arguments: data, label, path, log prefix.
const MAX_ARGS: usize = 4;

/// One request to pull a single entry out of an embedded archive.
///
/// The request borrows the archive text; nothing outlives the call that
/// consumes it.
///
/// # Examples
///
/// ```
/// use selftgz_core::ExtractionRequest;
/// use selftgz_core::test_utils::encode_tgz;
///
/// let archive = encode_tgz(&[("motd.txt", &b"welcome"[..])]);
/// let bytes = ExtractionRequest::new(&archive, "motd", "motd.txt").extract()?;
/// assert_eq!(bytes, b"welcome");
/// # Ok::<(), selftgz_core::ExtractionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionRequest<'a> {
    archive_data: &'a str,
    archive_label: &'a str,
    target_path: &'a str,
    options: ExtractOptions,
}

impl<'a> ExtractionRequest<'a> {
    /// Creates a request with default options.
    #[must_use]
    pub fn new(archive_data: &'a str, archive_label: &'a str, target_path: &'a str) -> Self {
        Self {
            archive_data,
            archive_label,
            target_path,
            options: ExtractOptions::default(),
        }
    }

    /// Builds a request from positional arguments.
    ///
    /// Accepts `[data, label, path]` or `[data, label, path, log_prefix]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` when fewer than three or more than four
    /// values are given. No decoding is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use selftgz_core::ErrorKind;
    /// use selftgz_core::ExtractionRequest;
    ///
    /// let err = ExtractionRequest::from_args(&["H4sI"]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &'a [S]) -> Result<Self> {
        if args.len() < MIN_ARGS {
            return Err(ExtractionError::InvalidArguments(format!(
                "not enough parameters: expected at least {MIN_ARGS}, got {}",
                args.len()
            )));
        }
        if args.len() > MAX_ARGS {
            return Err(ExtractionError::InvalidArguments(format!(
                "too many parameters: expected at most {MAX_ARGS}, got {}",
                args.len()
            )));
        }

        let mut request = Self::new(args[0].as_ref(), args[1].as_ref(), args[2].as_ref());
        if let Some(prefix) = args.get(3) {
            request.options.log_prefix = prefix.as_ref().to_string();
        }
        Ok(request)
    }

    /// Replaces the options of this request.
    #[must_use]
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Archive text.
    #[must_use]
    pub fn archive_data(&self) -> &'a str {
        self.archive_data
    }

    /// Archive label used in diagnostics and errors.
    #[must_use]
    pub fn archive_label(&self) -> &'a str {
        self.archive_label
    }

    /// Exact entry name to extract.
    #[must_use]
    pub fn target_path(&self) -> &'a str {
        self.target_path
    }

    /// Options of this request.
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Checks the request before any decoding.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` if the archive text is blank or the
    /// target path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.archive_data.trim().is_empty() {
            return Err(ExtractionError::InvalidArguments(
                "archive data is empty".to_string(),
            ));
        }
        if self.target_path.is_empty() {
            return Err(ExtractionError::InvalidArguments(
                "target path is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Extracts the entry, reporting diagnostics through the `log` crate.
    pub fn extract(&self) -> Result<Vec<u8>> {
        self.extract_with(&mut LogDiagnostics)
    }

    /// Extracts the entry, reporting diagnostics to `sink`.
    pub fn extract_with(&self, sink: &mut dyn DiagnosticSink) -> Result<Vec<u8>> {
        crate::api::run_extraction(self, sink)
    }
}
