//! Tar layer: linear entry scan.
//!
//! Entries are visited strictly in archive order, one at a time. A visitor
//! decides per entry whether to keep scanning; bodies it does not read are
//! skipped by the tar reader when it advances to the next header.

use std::io;
use std::io::Read;
use std::ops::ControlFlow;

/// Kind of a tar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Hard link.
    Hardlink,
    /// Any other entry type (devices, fifos, extensions).
    Other,
}

impl EntryKind {
    fn from_tar(entry_type: ::tar::EntryType) -> Self {
        match entry_type {
            ::tar::EntryType::Regular | ::tar::EntryType::Continuous => Self::File,
            ::tar::EntryType::Directory => Self::Directory,
            ::tar::EntryType::Symlink => Self::Symlink,
            ::tar::EntryType::Link => Self::Hardlink,
            _ => Self::Other,
        }
    }

    /// Returns a short lowercase name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::Hardlink => "hardlink",
            Self::Other => "other",
        }
    }
}

/// Metadata of one entry, as reported by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name, lossily converted to UTF-8.
    pub name: String,
    /// Body size declared by the header.
    pub size: u64,
    /// Entry type.
    pub kind: EntryKind,
}

/// Failure during a tar scan, before it is attributed to a pipeline stage.
#[derive(Debug)]
pub(crate) enum ScanError {
    /// The tar reader or the stream below it failed.
    Io(io::Error),
    /// The matched body ended before the size its header declared.
    Truncated { expected: u64, actual: u64 },
    /// The matched entry is larger than allowed.
    TooLarge { path: String, size: u64, max: u64 },
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Visits entries in order until `visit` breaks or the archive ends.
///
/// Returns `Ok(None)` when the end of the archive is reached without a
/// break.
pub(crate) fn scan_entries<R, T, F>(reader: R, mut visit: F) -> Result<Option<T>, ScanError>
where
    R: Read,
    F: FnMut(&mut ::tar::Entry<'_, R>) -> Result<ControlFlow<T>, ScanError>,
{
    let mut archive = ::tar::Archive::new(reader);

    for entry in archive.entries()? {
        let mut entry = entry?;
        if let ControlFlow::Break(found) = visit(&mut entry)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Returns the body of the first entry whose raw name equals `target`.
pub(crate) fn find_entry<R: Read>(
    reader: R,
    target: &[u8],
    max_size: u64,
) -> Result<Option<Vec<u8>>, ScanError> {
    scan_entries(reader, |entry| {
        if entry.path_bytes().as_ref() != target {
            return Ok(ControlFlow::Continue(()));
        }
        read_body(entry, max_size).map(ControlFlow::Break)
    })
}

/// Returns `true` if an entry named `target` exists, without reading its body.
pub(crate) fn has_entry<R: Read>(reader: R, target: &[u8]) -> Result<bool, ScanError> {
    let found = scan_entries(reader, |entry| {
        Ok(if entry.path_bytes().as_ref() == target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        })
    })?;
    Ok(found.is_some())
}

/// Collects metadata for every entry.
pub(crate) fn list_entries<R: Read>(reader: R) -> Result<Vec<EntryInfo>, ScanError> {
    let mut entries = Vec::new();
    scan_entries::<_, (), _>(reader, |entry| {
        entries.push(EntryInfo {
            name: String::from_utf8_lossy(&entry.path_bytes()).into_owned(),
            size: entry.size(),
            kind: EntryKind::from_tar(entry.header().entry_type()),
        });
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(entries)
}

fn read_body<R: Read>(entry: &mut ::tar::Entry<'_, R>, max_size: u64) -> Result<Vec<u8>, ScanError> {
    let expected = entry.size();
    if expected > max_size {
        return Err(ScanError::TooLarge {
            path: String::from_utf8_lossy(&entry.path_bytes()).into_owned(),
            size: expected,
            max: max_size,
        });
    }

    // Header size is untrusted; cap the up-front reservation
    let capacity = usize::try_from(expected.min(1024 * 1024)).unwrap_or(0);
    let mut body = Vec::with_capacity(capacity);
    entry.read_to_end(&mut body)?;

    let actual = body.len() as u64;
    if actual != expected {
        return Err(ScanError::Truncated { expected, actual });
    }

    Ok(body)
}
