//! The three layered encodings of an embedded archive.
//!
//! An embedded archive is `base64(gzip(tar(...)))`. Each submodule peels
//! one layer:
//!
//! - [`encoding`]: base64 text to raw bytes
//! - [`compression`]: gzip bytes to a decompressing reader
//! - [`tar`]: linear scan over tar entries

pub mod compression;
pub mod encoding;
pub mod tar;

pub use self::tar::EntryInfo;
pub use self::tar::EntryKind;
