//! Tracking reader that remembers failures of the reader it wraps.
//!
//! The tar parser sees every I/O error as an opaque `std::io::Error` and
//! may wrap it. Sitting directly on top of the decompressor, a
//! `TrackingReader` records whether a failure came from the decompressor
//! itself, so the pipeline can tell a corrupt gzip stream from a corrupt
//! tar stream after the fact.

use std::io;
use std::io::Read;

/// Wrapper reader that counts bytes read and records the first inner error.
///
/// # Examples
///
/// ```
/// use selftgz_core::io::TrackingReader;
/// use std::io::Read;
///
/// let mut reader = TrackingReader::new(&b"hello"[..]);
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
///
/// assert_eq!(reader.total_bytes(), 5);
/// assert!(!reader.has_failed());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TrackingReader<R> {
    inner: R,
    bytes_read: u64,
    fault: Option<(io::ErrorKind, String)>,
}

impl<R> TrackingReader<R> {
    /// Creates a new tracking reader.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
            fault: None,
        }
    }

    /// Returns the total number of bytes successfully read.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes_read
    }

    /// Returns `true` if the inner reader has returned an error.
    ///
    /// `Interrupted` errors are retried by callers and are not recorded.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.fault.is_some()
    }

    /// Takes the first recorded inner error, leaving none behind.
    pub fn take_fault(&mut self) -> Option<io::Error> {
        self.fault
            .take()
            .map(|(kind, message)| io::Error::new(kind, message))
    }

    /// Consumes the tracking reader and returns the inner reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for TrackingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => {
                self.bytes_read += n as u64;
                Ok(n)
            }
            Err(err) => {
                if err.kind() != io::ErrorKind::Interrupted && self.fault.is_none() {
                    self.fault = Some((err.kind(), err.to_string()));
                }
                Err(err)
            }
        }
    }
}
