//! File and directory size helpers.

use std::fs;
use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

/// Report the size of a file as a human-readable kilobyte string.
///
/// The byte count is divided by 1024 and rounded to the nearest integer
/// (ties round to the even integer), yielding strings like `"~ 2 KB"`.
///
/// # Errors
///
/// Propagates the underlying io error unchanged if the file does not exist
/// or its metadata cannot be read.
pub fn file_size(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::metadata(path.as_ref())?.len();
    Ok(format!("~ {} KB", to_rounded_kb(bytes)))
}

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Entries that cannot be read (permission denied, broken symlinks, ...)
/// are skipped, so the function always returns a total. A nonexistent path
/// yields `0`.
#[must_use]
pub fn dir_size(path: impl AsRef<Path>) -> u64 {
    WalkDir::new(path.as_ref())
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Convert a byte count to kilobytes, rounded to the nearest integer.
/// Exact half kilobytes round to the even integer, so 2560 bytes is 2 KB
/// while 3584 bytes is 4 KB.
fn to_rounded_kb(bytes: u64) -> u64 {
    let whole = bytes / 1024;
    match (bytes % 1024).cmp(&512) {
        std::cmp::Ordering::Less => whole,
        std::cmp::Ordering::Greater => whole + 1,
        std::cmp::Ordering::Equal => whole + (whole & 1),
    }
}
