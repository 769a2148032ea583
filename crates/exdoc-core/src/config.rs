//! Generator configuration (`exdoc.toml`) parsing and validation.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the optional config file looked up in the docs directory.
pub const CONFIG_FILE: &str = "exdoc.toml";

/// Settings for one generation run.
///
/// Every key is optional; the defaults reproduce the Atom docs build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root of the script tree, relative to the docs directory.
    pub base_path: PathBuf,

    /// Extension a file name must end with to be documented.
    pub script_extension: String,

    /// Tag prefixed to every output file name.
    pub output_prefix: String,

    /// Extension of the generated pages.
    pub output_extension: String,

    /// Substring of the script path where the relative path begins.
    pub path_anchor: String,

    /// Command shown in the page's run instruction.
    pub interpreter: String,

    /// Highlight language for the source listing.
    pub language: String,

    /// Project name used in the source listing heading.
    pub project: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("../../../examples"),
            script_extension: "py".to_string(),
            output_prefix: "ex_".to_string(),
            output_extension: "rst".to_string(),
            path_anchor: "examples".to_string(),
            interpreter: "python".to_string(),
            language: "python".to_string(),
            project: "Atom".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a config from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the driver relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.script_extension.is_empty() {
            return Err(ConfigError::Invalid {
                field: "script_extension",
                reason: "extension cannot be empty",
            });
        }

        if self.script_extension.starts_with('.') {
            return Err(ConfigError::Invalid {
                field: "script_extension",
                reason: "extension must not start with '.'",
            });
        }

        if self.output_extension.is_empty() {
            return Err(ConfigError::Invalid {
                field: "output_extension",
                reason: "extension cannot be empty",
            });
        }

        if self.path_anchor.is_empty() {
            return Err(ConfigError::Invalid {
                field: "path_anchor",
                reason: "anchor cannot be empty",
            });
        }

        Ok(())
    }

    /// File name suffix used by the discovery filter, e.g. `.py`.
    pub fn script_suffix(&self) -> String {
        format!(".{}", self.script_extension)
    }
}
