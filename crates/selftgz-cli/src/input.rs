//! Reading archive text from files or stdin.

use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

/// Path that selects stdin instead of a file.
pub const STDIN_MARKER: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

/// Reads the base64 archive text from `path`, or from stdin for `-`.
pub fn read_archive_text(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read archive text from stdin")?;
        return Ok(text);
    }

    fs::read_to_string(path)
        .with_context(|| format!("failed to read archive text from '{}'", path.display()))
}

/// Label used in diagnostics when none is given: the file name, or `stdin`.
pub fn default_label(path: &Path) -> String {
    if is_stdin(path) {
        return "stdin".to_string();
    }

    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
