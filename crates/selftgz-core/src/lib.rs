//! Extract files from tar.gz archives embedded in a program as base64 text.
//!
//! `selftgz-core` lets a program carry small payloads (templates, helper
//! binaries, assets) inside its own source as a base64 string, and pull a
//! single named file back out at runtime. The pipeline is strictly linear:
//! base64 decode, gzip decompress, scan tar entries in order, return the
//! first entry whose name matches exactly.
//!
//! # Examples
//!
//! ```
//! use selftgz_core::EmbeddedArchive;
//!
//! static ASSETS: EmbeddedArchive = EmbeddedArchive::new(
//!     "H4sIAAAAAAACA+3KTQrCMBTE8aw9xfMC8irBM3iNtHmthX5AjNLjN3Ul7i2C/99mhmG6ZJb7qTvlJbsv0eLi/SuLz1T1b33bKz2Xu6jbweOeQxJxf+pqwzBLm+ZRwiQ21hajRQmpufVPOx4cAAAAAAAAAAAAAAAAAOAnrdHK+YcAKAAA",
//!     "assets",
//! );
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let greeting = ASSETS.extract("greeting.txt")?;
//! assert_eq!(greeting, b"Hello from an embedded archive!\n");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod embedded;
pub mod error;
pub mod formats;
pub mod io;
pub mod request;
pub mod test_utils;

// Re-export main API types
pub use api::contains_entry;
pub use api::extract_file;
pub use api::extract_file_with_diagnostics;
pub use api::list_entries;
pub use config::ExtractOptions;
pub use diagnostics::DiagnosticSink;
pub use diagnostics::LogDiagnostics;
pub use diagnostics::NoopDiagnostics;
pub use embedded::EmbeddedArchive;
pub use error::ErrorKind;
pub use error::ExtractionError;
pub use error::Result;
pub use formats::EntryInfo;
pub use formats::EntryKind;
pub use request::ExtractionRequest;
