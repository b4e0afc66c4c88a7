//! Selection of operation source files and their display categories.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::core::config::DocGenConfig;
use crate::core::errors::{OpdocsError, Result};

/// List operation files directly inside the configured operations directory.
///
/// Subdirectories are not descended into. The result is sorted by file name.
pub fn list_operation_files(config: &DocGenConfig) -> Result<Vec<PathBuf>> {
    let dir = config.resolved_operations_dir();
    let globset = build_ignore_globset(&config.ignore)?;
    let mut files = Vec::new();

    let entries = fs::read_dir(&dir).map_err(|e| {
        OpdocsError::io(format!("Failed to read directory {}", dir.display()), e)
    })?;

    for entry in entries {
        let entry = entry
            .map_err(|e| OpdocsError::io(format!("Failed to read entry in {}", dir.display()), e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            OpdocsError::io(
                format!("Failed to determine file type for {}", path.display()),
                e,
            )
        })?;
        // Symlinked sources count when their target is a regular file.
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !is_operation_file(name, config) {
            continue;
        }
        if globset.is_match(Path::new(name)) {
            debug!(file = name, "skipping ignored operation file");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// True when `file_name` carries the configured extension and no test marker.
pub fn is_operation_file(file_name: &str, config: &DocGenConfig) -> bool {
    file_name.ends_with(&config.extension) && !file_name.contains(&config.test_marker)
}

/// Display category for a file: extension stripped, first letter upper-cased
/// and the remainder lower-cased.
pub fn category_name(file_name: &str, extension: &str) -> String {
    let stem = file_name.strip_suffix(extension).unwrap_or(file_name);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn build_ignore_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build().map_err(Into::into)
}
