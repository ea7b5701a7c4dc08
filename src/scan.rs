//! Directory enumeration and suffix filtering.
//!
//! Only regular files are considered; directories, sockets and other
//! entry kinds never match, regardless of name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ScanOrder, SuffixFilter};

/// A matched regular file: its path plus the basename used in headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    /// Full path of the matched file
    pub path: PathBuf,
    /// Basename written into the delimiter header
    pub name: String,
}

/// List regular files in `dir` whose basename matches `filter`.
///
/// `exclude` names a file that must never be returned even when it
/// matches; this keeps an output file living inside `dir` out of its own
/// merge. `ScanOrder::Directory` preserves the platform listing order,
/// `ScanOrder::Lexicographic` sorts by basename.
pub fn scan_directory(
    dir: &Path,
    filter: &SuffixFilter,
    exclude: Option<&Path>,
    order: ScanOrder,
) -> io::Result<Vec<SourcePath>> {
    let excluded_name = exclude.and_then(|path| excluded_basename(dir, path));

    let mut matched = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            // A non-UTF-8 basename cannot match a UTF-8 suffix.
            Err(_) => continue,
        };
        if !filter.matches(&name) {
            continue;
        }
        if excluded_name.as_deref() == Some(name.as_str()) {
            continue;
        }
        matched.push(SourcePath {
            path: entry.path(),
            name,
        });
    }

    if order == ScanOrder::Lexicographic {
        matched.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(matched)
}

/// Basename of `exclude` if it resolves to a file directly inside `dir`.
///
/// The output file may not exist yet on the first run; resolution failures
/// simply mean nothing is excluded.
fn excluded_basename(dir: &Path, exclude: &Path) -> Option<String> {
    let parent = match exclude.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let dir_resolved = fs::canonicalize(dir).ok()?;
    let parent_resolved = fs::canonicalize(&parent).ok()?;
    if dir_resolved != parent_resolved {
        return None;
    }
    exclude
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
