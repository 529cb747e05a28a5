//! Input resolution: turn the CLI's input flags into one ordered sequence of
//! candidate `.eml` files.
//!
//! Single-file and directory mode both resolve to the same sequence shape, so
//! the extraction pipeline downstream has exactly one code path.

use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// A candidate EML file produced by input resolution.
#[derive(Debug, Clone)]
pub struct EmlFile {
    /// Filesystem path the message is read from.
    pub path: PathBuf,

    /// Label recorded as the mapping's source column: the path as given for
    /// single files, the bare file name for files discovered in a directory.
    pub source_label: String,
}

/// Resolve a single-file input.
///
/// Yields at most one candidate. A path whose file name does not end in
/// `.eml` (case as given) yields nothing: a silent skip, not an error.
/// Existence is not checked here; a missing file surfaces when the message
/// is loaded.
pub fn resolve_single_file(path: &Path) -> Vec<EmlFile> {
    if !has_eml_suffix(path) {
        tracing::debug!(path = %path.display(), "Skipping input without .eml suffix");
        return Vec::new();
    }
    vec![EmlFile {
        path: path.to_path_buf(),
        source_label: path.display().to_string(),
    }]
}

/// Resolve a directory input by walking it recursively.
///
/// Collects every file whose name ends in `.eml`, at any nesting depth,
/// visiting entries in name order at each level. Fails if `dir` does not
/// exist or is not a directory.
pub fn resolve_dir(dir: &Path) -> Result<Vec<EmlFile>> {
    if !dir.is_dir() {
        return Err(ExtractError::InvalidInputDir(dir.to_path_buf()));
    }

    let mut found = Vec::new();
    walk(dir, &mut found);
    Ok(found)
}

/// Recurse into `dir`, appending `.eml` files to `found`.
///
/// Unreadable subdirectories are logged and skipped so one bad permission
/// does not abort the whole walk.
fn walk(dir: &Path, found: &mut Vec<EmlFile>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Could not read directory, skipping");
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            walk(&path, found);
        } else if has_eml_suffix(&path) {
            let source_label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            found.push(EmlFile {
                path,
                source_label,
            });
        }
    }
}

/// `true` if the path's file name ends in `.eml`, case as given.
fn has_eml_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".eml"))
}
