//! Archives compiled into the program as base64 string constants.

use crate::DiagnosticSink;
use crate::ExtractOptions;
use crate::ExtractionRequest;
use crate::LogDiagnostics;
use crate::Result;
use crate::api;
use crate::config::DEFAULT_LOG_PREFIX;
use crate::formats::EntryInfo;

/// A base64 tar.gz archive embedded in the program.
///
/// Const-constructible, so it can sit in a `static` next to the literal it
/// wraps. Every call decodes the archive afresh; nothing is cached.
///
/// # Examples
///
/// ```
/// use selftgz_core::EmbeddedArchive;
/// use selftgz_core::ErrorKind;
///
/// // tar.gz holding a single empty archive
/// static EMPTY: EmbeddedArchive = EmbeddedArchive::new(
///     "H4sIAAAAAAACA+3BAQ0AAADCoPdPbQ43oAAAAAAAAAAAAIA3A5reHScAKAAA",
///     "empty",
/// );
///
/// let err = EMPTY.extract("anything").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::EntryNotFound);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedArchive {
    data: &'static str,
    label: &'static str,
    log_prefix: &'static str,
}

impl EmbeddedArchive {
    /// Wraps embedded base64 text under a diagnostic label.
    #[must_use]
    pub const fn new(data: &'static str, label: &'static str) -> Self {
        Self {
            data,
            label,
            log_prefix: DEFAULT_LOG_PREFIX,
        }
    }

    /// Overrides the diagnostic log prefix.
    #[must_use]
    pub const fn with_log_prefix(mut self, prefix: &'static str) -> Self {
        self.log_prefix = prefix;
        self
    }

    /// Diagnostic label of this archive.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Raw base64 text of this archive.
    #[must_use]
    pub const fn data(&self) -> &'static str {
        self.data
    }

    fn options(&self) -> ExtractOptions {
        ExtractOptions::default().with_log_prefix(self.log_prefix)
    }

    fn request<'a>(&self, path: &'a str) -> ExtractionRequest<'a> {
        ExtractionRequest::new(self.data, self.label, path).with_options(self.options())
    }

    /// Extracts the entry named exactly `path`.
    pub fn extract(&self, path: &str) -> Result<Vec<u8>> {
        self.extract_with(path, &mut LogDiagnostics)
    }

    /// Extracts the entry named exactly `path`, reporting to `sink`.
    pub fn extract_with(&self, path: &str, sink: &mut dyn DiagnosticSink) -> Result<Vec<u8>> {
        self.request(path).extract_with(sink)
    }

    /// Returns `true` if an entry named exactly `path` exists.
    pub fn contains(&self, path: &str) -> Result<bool> {
        api::contains_entry(self.data, self.label, path, &self.options())
    }

    /// Lists every entry in tar order.
    pub fn entries(&self) -> Result<Vec<EntryInfo>> {
        api::list_entries(self.data, self.label, &self.options())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::test_utils::RecordedDiagnostic;
    use crate::test_utils::RecordingDiagnostics;
    use crate::test_utils::encode_tgz;

    fn leak(s: String) -> &'static str {
        Box::leak(s.into_boxed_str())
    }

    #[test]
    fn test_embedded_extract() {
        let data = leak(encode_tgz(&[("bin/tool", &b"\x7fELF"[..])]));
        let archive = EmbeddedArchive::new(data, "tools");

        assert_eq!(archive.extract("bin/tool").unwrap(), b"\x7fELF");
        assert_eq!(archive.label(), "tools");
        assert!(archive.contains("bin/tool").unwrap());
        assert!(!archive.contains("bin/other").unwrap());
    }

    #[test]
    fn test_embedded_entries() {
        let data = leak(encode_tgz(&[("a", &b"1"[..]), ("b", &b"22"[..])]));
        let entries = EmbeddedArchive::new(data, "pair").entries().unwrap();
        let sizes: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.size)).collect();
        assert_eq!(sizes, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_embedded_prefix_reaches_sink() {
        let data = leak(encode_tgz(&[("a", &b"1"[..])]));
        let archive = EmbeddedArchive::new(data, "pair").with_log_prefix("[assets]");
        let mut sink = RecordingDiagnostics::new();

        let err = archive.extract_with("zzz", &mut sink).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntryNotFound);
        assert!(matches!(
            sink.events.as_slice(),
            [RecordedDiagnostic::EndOfArchive { prefix, label, .. }]
                if prefix == "[assets]" && label == "pair"
        ));
    }

    #[test]
    fn test_embedded_static() {
        static BROKEN: EmbeddedArchive = EmbeddedArchive::new("%%%%", "broken");
        assert_eq!(
            BROKEN.extract("x").unwrap_err().kind(),
            ErrorKind::DecodeFailure
        );
        assert_eq!(BROKEN.data(), "%%%%");
    }
}
