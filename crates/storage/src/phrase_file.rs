//! Plain-text phrase file codec.
//!
//! Each pair takes two consecutive non-blank lines (primary, then target).
//! Blank or whitespace-only lines separate pairs and are ignored; trailing
//! whitespace is trimmed from every kept line. A final line without a partner
//! is dropped.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use drill_core::Phrase;

use crate::repository::StorageError;

/// Parse phrase pairs from file contents.
#[must_use]
pub fn parse(text: &str) -> Vec<Phrase> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .chunks_exact(2)
        .map(|pair| Phrase::new(pair[0], pair[1]))
        .collect()
}

/// Render phrases as `primary\ntarget\n\n` per pair.
#[must_use]
pub fn render(phrases: &[Phrase]) -> String {
    let mut out = String::new();
    for phrase in phrases {
        out.push_str(phrase.primary());
        out.push('\n');
        out.push_str(phrase.target());
        out.push_str("\n\n");
    }
    out
}

/// Read the file at `path` as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD; the returned
/// flag is `true` when that happened.
///
/// # Errors
///
/// Returns `StorageError::NotFound` if the file does not exist and
/// `StorageError::Io` for any other read failure.
pub fn read_text(path: &Path) -> Result<(String, bool), StorageError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            path: path.display().to_string(),
        },
        _ => StorageError::Io {
            path: path.display().to_string(),
            source,
        },
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok((text, false)),
        Err(err) => Ok((String::from_utf8_lossy(err.as_bytes()).into_owned(), true)),
    }
}

/// Write `phrases` to `path`, truncating or creating the file.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be written.
pub fn write_phrases(path: &Path, phrases: &[Phrase]) -> Result<(), StorageError> {
    fs::write(path, render(phrases)).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })
}
