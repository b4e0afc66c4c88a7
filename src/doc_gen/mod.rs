//! Operations reference generation.
//!
//! Scans a flat directory of operation sources for `$name(args:` signatures,
//! attributes each to the documentation block above it, and renders a Markdown
//! table per source file. Files without any operation are left out.

mod discovery;
mod extractor;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::DocGenConfig;
use crate::core::errors::{OpdocsError, Result};

pub use discovery::{category_name, is_operation_file, list_operation_files};
pub use extractor::{extract, find_doc_start, OperationRecord};
pub use render::{render_json, render_markdown};

/// Operations extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    /// File name inside the operations directory.
    pub filename: String,
    /// Display label derived from the file name.
    pub category: String,
    /// Records sorted by operator then line.
    pub operations: Vec<OperationRecord>,
}

/// All non-empty sections, in file-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCatalog {
    /// Sections in file-name order.
    pub sections: Vec<CategorySection>,
}

impl OperationCatalog {
    /// Total number of records across all sections.
    pub fn operation_count(&self) -> usize {
        self.sections.iter().map(|s| s.operations.len()).sum()
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Where the document was written.
    pub output: PathBuf,
    /// Operation files that were read.
    pub files_scanned: usize,
    /// Sections emitted into the document.
    pub sections: usize,
    /// Operations listed across all sections.
    pub operations: usize,
}

/// Scan the configured operations directory and collect non-empty sections.
pub fn build_catalog(config: &DocGenConfig) -> Result<OperationCatalog> {
    let (catalog, _) = scan_operation_files(config)?;
    Ok(catalog)
}

/// Build the catalog, render it as Markdown and write it to `config.output`.
pub fn run_generation(config: &DocGenConfig) -> Result<GenerationSummary> {
    config.validate()?;
    let (catalog, files_scanned) = scan_operation_files(config)?;
    let document = render_markdown(&catalog, config);
    let output = config.resolved_output();
    write_document(&output, &document)?;

    let summary = GenerationSummary {
        output,
        files_scanned,
        sections: catalog.sections.len(),
        operations: catalog.operation_count(),
    };
    info!(
        output = %summary.output.display(),
        files = summary.files_scanned,
        sections = summary.sections,
        operations = summary.operations,
        "operations reference generated"
    );
    Ok(summary)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            OpdocsError::io(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }
    fs::write(path, contents)
        .map_err(|e| OpdocsError::io(format!("Failed to write {}", path.display()), e))
}

/// Returns true when `path` exists and holds exactly `contents`.
pub fn check_document(path: &Path, contents: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == contents),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(OpdocsError::io(
            format!("Failed to read {}", path.display()),
            err,
        )),
    }
}

fn scan_operation_files(config: &DocGenConfig) -> Result<(OperationCatalog, usize)> {
    let files = list_operation_files(config)?;
    let mut catalog = OperationCatalog::default();

    for path in &files {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_default();
        let content = fs::read_to_string(path)
            .map_err(|e| OpdocsError::io(format!("Failed to read {}", path.display()), e))?;

        let operations = extract(&content);
        if operations.is_empty() {
            debug!(file = %filename, "no operations found, skipping section");
            continue;
        }

        debug!(file = %filename, count = operations.len(), "extracted operations");
        catalog.sections.push(CategorySection {
            category: category_name(&filename, &config.extension),
            filename,
            operations,
        });
    }

    Ok((catalog, files.len()))
}

#[cfg(test)]
#[path = "../doc_gen_tests.rs"]
mod tests;
