//! Configuration for the operations reference generator.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line overrides applied by the binary.

use std::path::{Path, PathBuf};

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::core::errors::{OpdocsError, Result};

/// Default directory (relative to the root) holding operation sources.
pub const DEFAULT_OPERATIONS_DIR: &str = "src/operations";

/// Default output path (relative to the root) of the generated document.
pub const DEFAULT_OUTPUT: &str = "docs/operations.md";

/// Default suffix selecting operation source files.
pub const DEFAULT_EXTENSION: &str = ".ts";

/// Default substring marking test files that must not be scanned.
pub const DEFAULT_TEST_MARKER: &str = ".test.";

/// Default link prefix used in the `Source` column.
pub const DEFAULT_LINK_PREFIX: &str = "src/operations";

/// Default document heading.
pub const DEFAULT_TITLE: &str = "Available Operations";

/// Implicit config file names looked up in the project root.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".opdocs.yml", ".opdocs.yaml"];

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocGenConfig {
    /// Project root that relative paths are resolved against.
    pub root: PathBuf,
    /// Directory holding the operation source files.
    pub operations_dir: PathBuf,
    /// Markdown document to write.
    pub output: PathBuf,
    /// File-name suffix selecting operation files.
    pub extension: String,
    /// Files whose name contains this marker are skipped.
    pub test_marker: String,
    /// Path prefix used when linking to a source file.
    pub link_prefix: String,
    /// Top-level heading of the document.
    pub title: String,
    /// Extra glob patterns (relative to the operations directory) to skip.
    pub ignore: Vec<String>,
}

impl Default for DocGenConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl DocGenConfig {
    /// Create a configuration with defaults for the given root.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            operations_dir: PathBuf::from(DEFAULT_OPERATIONS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            test_marker: DEFAULT_TEST_MARKER.to_string(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            title: DEFAULT_TITLE.to_string(),
            ignore: Vec::new(),
        }
    }

    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            OpdocsError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Find an implicit config file (`.opdocs.yml` / `.opdocs.yaml`) in `root`.
    pub fn find_implicit_file(root: &Path) -> Option<PathBuf> {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Operations directory joined onto the root unless already absolute.
    pub fn resolved_operations_dir(&self) -> PathBuf {
        resolve_against(&self.root, &self.operations_dir)
    }

    /// Output path joined onto the root unless already absolute.
    pub fn resolved_output(&self) -> PathBuf {
        resolve_against(&self.root, &self.output)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(OpdocsError::validation_field(
                "extension must not be empty",
                "extension",
            ));
        }
        if !self.extension.starts_with('.') {
            return Err(OpdocsError::validation_field(
                format!("extension must start with '.', got '{}'", self.extension),
                "extension",
            ));
        }
        if self.link_prefix.trim().is_empty() {
            return Err(OpdocsError::validation_field(
                "link_prefix must not be empty",
                "link_prefix",
            ));
        }
        for pattern in &self.ignore {
            Glob::new(pattern).map_err(|err| {
                OpdocsError::config_field(
                    format!("Invalid ignore glob '{pattern}': {err}"),
                    "ignore",
                )
            })?;
        }
        Ok(())
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
