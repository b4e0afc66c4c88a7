//! # opdocs: Operations Reference Generator
//!
//! Scans a directory of operation sources for `$name(args:` signatures and
//! produces a Markdown reference that links every operator to its source line.
//! When a `/** ... */` block sits directly above a signature, the link points at
//! the block's first line instead of the signature.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use opdocs::{run_generation, DocGenConfig};
//!
//! fn main() -> opdocs::Result<()> {
//!     let config = DocGenConfig::new(PathBuf::from("."));
//!     let summary = run_generation(&config)?;
//!     println!("Documentation generated in {}", summary.output.display());
//!     Ok(())
//! }
//! ```
//!
//! Extraction alone is a pure function:
//!
//! ```rust
//! use opdocs::{extract, OperationRecord};
//!
//! let records = extract("/**\n * Adds.\n */\n$add(args: [a, b])\n");
//! assert_eq!(records, vec![OperationRecord::new("$add", 1)]);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration and error handling
pub mod core {
    //! Configuration and error types shared by the generator.

    pub mod config;
    pub mod errors;
}

pub mod doc_gen;

// Re-export primary types for convenience
pub use crate::core::config::DocGenConfig;
pub use crate::core::errors::{OpdocsError, Result};
pub use doc_gen::{
    build_catalog, category_name, check_document, extract, render_json, render_markdown,
    run_generation, write_document, CategorySection, GenerationSummary, OperationCatalog,
    OperationRecord,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
