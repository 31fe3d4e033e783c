//! Base64 layer.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::ExtractionError;
use crate::Result;

/// Decodes the base64 text of an embedded archive.
///
/// Uses the standard alphabet with padding. Carriage returns and line feeds
/// are ignored so that literals wrapped across several lines decode as one.
/// Any other invalid input is an error; nothing is decoded partially.
///
/// # Examples
///
/// ```
/// use selftgz_core::formats::encoding::decode_archive_text;
///
/// let bytes = decode_archive_text("aGVs\nbG8=", "greeting")?;
/// assert_eq!(bytes, b"hello");
/// # Ok::<(), selftgz_core::ExtractionError>(())
/// ```
pub fn decode_archive_text(text: &str, label: &str) -> Result<Vec<u8>> {
    let result = if text.contains(['\r', '\n']) {
        let joined: Vec<u8> = text
            .bytes()
            .filter(|b| !matches!(b, b'\r' | b'\n'))
            .collect();
        STANDARD.decode(joined)
    } else {
        STANDARD.decode(text)
    };

    result.map_err(|source| ExtractionError::DecodeFailure {
        label: label.to_string(),
        source,
    })
}
