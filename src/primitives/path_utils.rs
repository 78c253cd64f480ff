//! Path helpers
//!
//! Documents and the recent-files list identify files by their absolute,
//! lexically normalized path. Resolution never touches the filesystem, so a
//! path can be resolved before the file it names exists (Save As targets,
//! stale recent entries).

use std::io;
use std::path::{Component, Path, PathBuf};

/// Returns true for an empty or whitespace-only path
pub fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Resolve `path` to an absolute path against the process working directory
///
/// `.` and `..` components are folded lexically; symlinks are not followed.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(resolve_absolute_from(&cwd, path))
}

/// Resolve `path` against an explicit base directory
pub fn resolve_absolute_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pops past the root
                if matches!(result.components().next_back(), Some(Component::Normal(_))) {
                    result.pop();
                }
            }
            Component::Normal(part) => result.push(part),
        }
    }
    result
}

/// Case-insensitive path equality
pub fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// Base name of a path as an owned string, if it has one
pub fn file_name_string(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
