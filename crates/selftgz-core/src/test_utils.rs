//! Test utilities for building embedded archives and observing diagnostics.
//!
//! This module provides reusable helpers for creating in-memory
//! `base64(gzip(tar))` fixtures, so tests in this crate and in dependent
//! crates share one way of producing them.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::GzEncoder;

use crate::DiagnosticSink;
use crate::ErrorKind;
use crate::ExtractionError;

/// Builder for creating TAR test archives with various entry types.
///
/// # Examples
///
/// ```
/// use selftgz_core::test_utils::TarTestBuilder;
///
/// let encoded = TarTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build_encoded();
/// assert!(encoded.starts_with("H4sI"));
/// ```
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    /// Creates a new TAR test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Adds a regular file to the archive.
    ///
    /// Names longer than the header field use the GNU long name extension.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a regular file whose header name field is written verbatim.
    ///
    /// Bypasses the path cleanup done by `tar::Builder`, so names like
    /// `./file` survive as-is. `name` must fit in 100 bytes.
    #[must_use]
    pub fn add_raw_name(mut self, name: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Adds a directory to the archive.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o755);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a symlink to the archive.
    #[must_use]
    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a hardlink to the archive.
    #[must_use]
    pub fn add_hardlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Link);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Builds and returns the raw TAR data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Builds the archive and returns it gzip-compressed.
    #[must_use]
    pub fn build_gzipped(self) -> Vec<u8> {
        gzip_bytes(&self.build())
    }

    /// Builds the archive and returns it as embeddable base64 text.
    #[must_use]
    pub fn build_encoded(self) -> String {
        encode_base64(&self.build_gzipped())
    }
}

impl Default for TarTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Gzip-compresses `data` with the default level.
#[must_use]
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Encodes `data` as standard padded base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encodes a list of `(path, content)` files as `base64(gzip(tar))`.
///
/// # Examples
///
/// ```
/// use selftgz_core::test_utils::encode_tgz;
///
/// let encoded = encode_tgz(&[("file.txt", &b"hello"[..]), ("dir/nested.txt", &b"world"[..])]);
/// ```
#[must_use]
pub fn encode_tgz(entries: &[(&str, &[u8])]) -> String {
    entries
        .iter()
        .fold(TarTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build_encoded()
}

/// One diagnostic callback captured by [`RecordingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedDiagnostic {
    /// `end_of_archive` was called.
    EndOfArchive {
        /// Prefix passed to the sink.
        prefix: String,
        /// Archive label.
        label: String,
        /// Requested entry.
        target: String,
    },
    /// `unreadable_archive` was called.
    Unreadable {
        /// Prefix passed to the sink.
        prefix: String,
        /// Archive label.
        label: String,
        /// Kind of the reported error.
        kind: ErrorKind,
    },
}

/// Diagnostic sink that records every callback for later assertions.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    /// Captured callbacks in call order.
    pub events: Vec<RecordedDiagnostic>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no callback has fired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn end_of_archive(&mut self, prefix: &str, label: &str, target: &str) {
        self.events.push(RecordedDiagnostic::EndOfArchive {
            prefix: prefix.to_string(),
            label: label.to_string(),
            target: target.to_string(),
        });
    }

    fn unreadable_archive(&mut self, prefix: &str, label: &str, error: &ExtractionError) {
        self.events.push(RecordedDiagnostic::Unreadable {
            prefix: prefix.to_string(),
            label: label.to_string(),
            kind: error.kind(),
        });
    }
}
