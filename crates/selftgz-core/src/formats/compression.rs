//! Gzip layer.

use std::io;

use flate2::read::MultiGzDecoder;

use crate::ExtractionError;
use crate::Result;
use crate::io::TrackingReader;

/// Magic bytes every gzip member starts with.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompressing reader over decoded archive bytes.
pub type GzipSource<'a> = TrackingReader<MultiGzDecoder<&'a [u8]>>;

/// Returns `true` if `bytes` start with the gzip magic.
#[must_use]
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Opens a decompressing reader over `bytes`.
///
/// Concatenated gzip members are read as a single stream. Header and body
/// errors past the magic check surface on read and are recorded by the
/// returned [`TrackingReader`].
///
/// # Errors
///
/// Returns `DecompressFailure` if `bytes` do not start with the gzip magic.
pub fn open_gzip<'a>(bytes: &'a [u8], label: &str) -> Result<GzipSource<'a>> {
    if !is_gzip(bytes) {
        return Err(ExtractionError::DecompressFailure {
            label: label.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, "invalid gzip header"),
        });
    }

    Ok(TrackingReader::new(MultiGzDecoder::new(bytes)))
}
