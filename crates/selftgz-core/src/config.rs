//! Extraction options.

/// Log prefix used when the caller does not supply one.
pub const DEFAULT_LOG_PREFIX: &str = "[selftgz]";

/// Default upper bound on the size of an extracted entry (256 MiB).
pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 256 * 1024 * 1024;

/// Options controlling a single extraction.
///
/// # Examples
///
/// ```
/// use selftgz_core::ExtractOptions;
///
/// // Defaults: "[selftgz]" prefix, 256 MiB entry limit
/// let options = ExtractOptions::default();
///
/// let custom = ExtractOptions::default()
///     .with_log_prefix("[installer]")
///     .with_max_entry_size(8 * 1024 * 1024);
/// assert_eq!(custom.log_prefix, "[installer]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Tag prepended to every diagnostic line.
    pub log_prefix: String,

    /// Maximum size of the matched entry in bytes, as declared by its header.
    pub max_entry_size: u64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
        }
    }
}

impl ExtractOptions {
    /// Sets the diagnostic log prefix.
    #[must_use]
    pub fn with_log_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_prefix = prefix.into();
        self
    }

    /// Sets the maximum entry size in bytes.
    #[must_use]
    pub fn with_max_entry_size(mut self, max: u64) -> Self {
        self.max_entry_size = max;
        self
    }
}
