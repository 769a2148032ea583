//! exdoc Core - documentation pages for example scripts
//!
//! This crate turns every example script under a directory tree into a
//! reStructuredText page:
//! - Docstring: extraction of the leading `"""` block and inline-code cleanup
//! - Naming: script name, page title and relative path derivation
//! - Render: substitution into the fixed page template
//! - Generate: directory walk and one output file per script

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator configuration loaded from `exdoc.toml`
pub mod config;

/// Docstring extraction and cleanup
pub mod docstring;

/// Error types
pub mod error;

/// Directory walker and per-script driver
pub mod generate;

/// Name and path derivation for scripts and pages
pub mod naming;

/// Page template rendering
pub mod render;

pub use config::{GeneratorConfig, CONFIG_FILE};
pub use docstring::{clean_docstring, extract_docstring, DOCSTRING_DELIMITER};
pub use error::{ConfigError, DocstringError, GenerateError};
pub use generate::{generate_all, Generator};
pub use render::{render, PageTemplate};
