//! Local filesystem helpers
//!
//! Reads decode UTF-8 text; writes go through a temp file in the target's
//! directory followed by a rename, so the target is either fully replaced or
//! left untouched.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a whole file as UTF-8 text
///
/// A leading byte-order mark is dropped. Content that is not valid UTF-8
/// fails with `ErrorKind::InvalidData`.
pub fn read_text(path: &Path) -> io::Result<String> {
    let mut text = fs::read_to_string(path)?;
    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    Ok(text)
}

/// Unique temp file path next to `path` used for atomic writes
///
/// Hidden, and tagged with the process id and a nanosecond timestamp so it
/// never coincides with a file the user keeps beside the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slate".to_string());
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    path.with_file_name(format!(
        ".{}.{}-{}.tmp",
        file_name,
        std::process::id(),
        timestamp
    ))
}

/// Write `contents` to `path` atomically: temp file + sync + rename
///
/// The temp file is created exclusively, so an existing file is never
/// truncated in its place.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }

    let temp_path = temp_path_for(path);
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;

    let result = (|| -> io::Result<()> {
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
